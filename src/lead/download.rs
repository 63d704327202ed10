use log::{error, info};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::error::RenderError;

/// A static file served next to the site, and the name the browser should
/// save it under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadAsset {
    pub path: String,
    pub filename: String,
}

pub trait DownloadTrigger {
    fn trigger(&self, asset: &DownloadAsset) -> Result<(), RenderError>;
}

/// Clicks a throwaway `<a download>` element.
pub struct AnchorDownload;

impl DownloadTrigger for AnchorDownload {
    fn trigger(&self, asset: &DownloadAsset) -> Result<(), RenderError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(RenderError::NoDocument)?;
        let body = document.body().ok_or(RenderError::NoDocument)?;

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| RenderError::Dom("created element is not an anchor".to_string()))?;
        link.set_href(&asset.path);
        link.set_download(&asset.filename);

        // Firefox ignores clicks on detached anchors.
        body.append_child(&link).map_err(dom_error)?;
        link.click();
        body.remove_child(&link).map_err(dom_error)?;
        Ok(())
    }
}

fn dom_error(err: JsValue) -> RenderError {
    RenderError::Dom(format!("{:?}", err))
}

/// Runs the trigger and reports whether the browser accepted it.
pub fn start_download<D: DownloadTrigger + ?Sized>(trigger: &D, asset: &DownloadAsset) -> bool {
    match trigger.trigger(asset) {
        Ok(()) => {
            info!("Started download of {}", asset.filename);
            true
        }
        Err(e) => {
            error!("Error downloading PDF: {}", e);
            false
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    pub struct MockDownload {
        pub result: Result<(), RenderError>,
        pub started: RefCell<Vec<DownloadAsset>>,
    }

    impl MockDownload {
        pub fn new(result: Result<(), RenderError>) -> Self {
            Self {
                result,
                started: RefCell::new(Vec::new()),
            }
        }
    }

    impl DownloadTrigger for MockDownload {
        fn trigger(&self, asset: &DownloadAsset) -> Result<(), RenderError> {
            self.started.borrow_mut().push(asset.clone());
            self.result.clone()
        }
    }

    fn guide() -> DownloadAsset {
        DownloadAsset {
            path: "/guide.pdf".to_string(),
            filename: "Guide.pdf".to_string(),
        }
    }

    #[test]
    fn test_start_download_success() {
        let trigger = MockDownload::new(Ok(()));
        assert!(start_download(&trigger, &guide()));
        assert_eq!(trigger.started.borrow().as_slice(), &[guide()]);
    }

    #[test]
    fn test_start_download_failure_is_swallowed() {
        let trigger = MockDownload::new(Err(RenderError::NoDocument));
        assert!(!start_download(&trigger, &guide()));
    }
}
