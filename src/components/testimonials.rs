use web_sys::TouchEvent;
use yew::prelude::*;

use crate::components::video::VideoEmbed;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub video_url: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Clint Tabon",
        role: "Focal Point Business Coaching",
        quote: "Adrienne is the reason behind my success. Her expertise helped me scale my franchise business beyond what I imagined!",
        video_url: "https://drive.google.com/file/d/1xYDMkLrAJZeJqREbchF8UOq0IzSrGhHW/preview",
    },
    Testimonial {
        id: 2,
        name: "Michael Harding",
        role: "Owner, Five Star Painting",
        quote: "I wasn't sure if franchising was right for me, but Adrienne's guidance made all the difference. Best decision I ever made.",
        video_url: "https://drive.google.com/file/d/1-cawDbamZHUfS_hclZVfvlv7HllrD-ZL/preview",
    },
];

/// Minimum horizontal travel in pixels before a touch counts as a swipe.
const MIN_SWIPE_DISTANCE: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let distance = start_x - end_x;
    if distance > MIN_SWIPE_DISTANCE {
        Some(SwipeDirection::Left)
    } else if distance < -MIN_SWIPE_DISTANCE {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.target_touches().get(0).map(|touch| f64::from(touch.client_x()))
}

#[function_component(TestimonialSlider)]
pub fn testimonial_slider() -> Html {
    let current = use_state(|| 0usize);
    let touch_start = use_state(|| None::<f64>);
    let touch_end = use_state(|| None::<f64>);
    let len = TESTIMONIALS.len();

    let prev = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(prev_index(*current, len)))
    };
    let next = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(next_index(*current, len)))
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        let touch_end = touch_end.clone();
        Callback::from(move |e: TouchEvent| {
            touch_end.set(None);
            touch_start.set(first_touch_x(&e));
        })
    };
    let on_touch_move = {
        let touch_end = touch_end.clone();
        Callback::from(move |e: TouchEvent| touch_end.set(first_touch_x(&e)))
    };
    let on_touch_end = {
        let current = current.clone();
        let touch_start = touch_start.clone();
        let touch_end = touch_end.clone();
        Callback::from(move |_: TouchEvent| {
            if let (Some(start), Some(end)) = (*touch_start, *touch_end) {
                match swipe_direction(start, end) {
                    Some(SwipeDirection::Left) => current.set(next_index(*current, len)),
                    Some(SwipeDirection::Right) => current.set(prev_index(*current, len)),
                    None => {}
                }
            }
        })
    };

    let track_style = format!("transform: translateX(-{}%);", *current * 100);

    html! {
        <div class="testimonial-slider">
            <style>
                {r#"
                    .testimonial-slider {
                        position: relative;
                        overflow: hidden;
                        border-radius: 0.5rem;
                        background: #fff;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    .testimonial-track {
                        display: flex;
                        transition: transform 0.5s ease-in-out;
                    }
                    .testimonial-item {
                        flex: 0 0 100%;
                        padding: 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    .testimonial-item blockquote {
                        font-size: 1.25rem;
                        font-style: italic;
                        color: #374151;
                        margin: 0 0 1.5rem 0;
                    }
                    .testimonial-name { font-weight: 700; font-size: 1.125rem; color: #111827; }
                    .testimonial-role { color: #16a34a; }
                    .slider-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 10;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 0.8rem;
                        background: rgba(255, 255, 255, 0.8);
                        color: #16a34a;
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .slider-arrow.prev { left: 1rem; }
                    .slider-arrow.next { right: 1rem; }
                    .slider-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.5rem;
                        padding-bottom: 1rem;
                    }
                    .slider-dot {
                        height: 0.5rem;
                        width: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #d1d5db;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .slider-dot.active { background: #16a34a; width: 1.5rem; }
                    @media (max-width: 768px) {
                        .testimonial-item { grid-template-columns: 1fr; padding: 1.5rem; }
                    }
                "#}
            </style>
            <button class="slider-arrow prev" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
            <button class="slider-arrow next" onclick={next} aria-label="Next testimonial">{"›"}</button>

            <div
                class="testimonial-track"
                style={track_style}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                { for TESTIMONIALS.iter().map(|t| html! {
                    <div key={t.id} class="testimonial-item">
                        <VideoEmbed src={t.video_url} title={format!("Testimonial from {}", t.name)} />
                        <div>
                            <blockquote>{t.quote}</blockquote>
                            <div class="testimonial-name">{t.name}</div>
                            <div class="testimonial-role">{t.role}</div>
                        </div>
                    </div>
                }) }
            </div>

            <div class="slider-dots">
                { for (0..len).map(|index| {
                    let current = current.clone();
                    let is_active = *current == index;
                    html! {
                        <button
                            key={index}
                            class={classes!("slider-dot", is_active.then(|| "active"))}
                            aria-label={format!("Go to testimonial {}", index + 1)}
                            onclick={Callback::from(move |_: MouseEvent| current.set(index))}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        assert_eq!(next_index(0, 2), 1);
        assert_eq!(next_index(1, 2), 0);
        assert_eq!(prev_index(0, 2), 1);
        assert_eq!(prev_index(1, 2), 0);
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn test_swipe_needs_minimum_distance() {
        assert_eq!(swipe_direction(300.0, 200.0), Some(SwipeDirection::Left));
        assert_eq!(swipe_direction(200.0, 300.0), Some(SwipeDirection::Right));
        assert_eq!(swipe_direction(200.0, 160.0), None);
        assert_eq!(swipe_direction(200.0, 250.0), None);
    }

    #[test]
    fn test_testimonials_have_unique_ids() {
        let mut ids: Vec<u32> = TESTIMONIALS.iter().map(|t| t.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), TESTIMONIALS.len());
    }
}
