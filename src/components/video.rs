use yew::prelude::*;

const EMBED_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

#[derive(Properties, PartialEq)]
pub struct VideoEmbedProps {
    pub src: AttrValue,
    pub title: AttrValue,
}

fn embed_frame(src: AttrValue, title: AttrValue) -> Html {
    html! {
        <iframe
            {src}
            {title}
            frameborder="0"
            allow={EMBED_ALLOW}
            allowfullscreen={true}
        ></iframe>
    }
}

/// 16:9 third-party player (YouTube, Drive preview).
#[function_component(VideoEmbed)]
pub fn video_embed(props: &VideoEmbedProps) -> Html {
    html! {
        <div class="video-embed">
            {embed_frame(props.src.clone(), props.title.clone())}
        </div>
    }
}

pub const VIDEO_STYLES: &str = r#"
    .video-embed {
        position: relative;
        aspect-ratio: 16 / 9;
        background: #f3f4f6;
        border-radius: 0.75rem;
        overflow: hidden;
    }
    .video-embed iframe {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        border: 0;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn test_frame_allows_fullscreen() {
        let frame = embed_frame("https://www.youtube.com/embed/intro".into(), "Intro".into());
        let VNode::VTag(tag) = frame else {
            panic!("expected an iframe");
        };
        assert_eq!(tag.tag(), "iframe");
        let attributes: Vec<(&str, &str)> = tag.attributes.iter().collect();
        assert!(attributes.iter().any(|(name, _)| *name == "allowfullscreen"));
        assert!(attributes.contains(&("src", "https://www.youtube.com/embed/intro")));
    }
}
