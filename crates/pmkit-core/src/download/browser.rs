//! DOM-backed document (wasm32 with the `web` feature).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use super::{Anchor, AnchorId, Blob, Document, DownloadError};

fn js_err(e: JsValue) -> DownloadError {
    DownloadError::Browser(format!("{e:?}"))
}

/// Current page document, as seen through `web-sys`.
pub struct BrowserDocument {
    document: web_sys::Document,
    anchors: Vec<Option<HtmlAnchorElement>>,
}

impl BrowserDocument {
    pub fn new() -> Result<Self, DownloadError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError::Browser("no document".to_string()))?;
        Ok(Self {
            document,
            anchors: Vec::new(),
        })
    }

    fn anchor(&self, id: AnchorId) -> Result<&HtmlAnchorElement, DownloadError> {
        self.anchors
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(DownloadError::UnknownAnchor(id.index()))
    }
}

impl Document for BrowserDocument {
    fn create_object_url(&mut self, blob: Blob) -> Result<String, DownloadError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(blob.data.as_slice()));

        let options = web_sys::BlobPropertyBag::new();
        if let Some(mime) = &blob.mime_type {
            options.set_type(mime);
        }
        let js_blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        web_sys::Url::create_object_url_with_blob(&js_blob).map_err(js_err)
    }

    fn append_anchor(&mut self, anchor: Anchor) -> Result<AnchorId, DownloadError> {
        let element: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| DownloadError::Browser("<a> is not an anchor element".to_string()))?;
        element.set_href(&anchor.href);
        element.set_download(&anchor.download);

        let body = self
            .document
            .body()
            .ok_or_else(|| DownloadError::Browser("document has no body".to_string()))?;
        body.append_child(&element).map_err(js_err)?;

        let id = AnchorId::new(self.anchors.len());
        self.anchors.push(Some(element));
        Ok(id)
    }

    fn click(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        self.anchor(id)?.click();
        Ok(())
    }

    fn remove(&mut self, id: AnchorId) -> Result<(), DownloadError> {
        let element = self
            .anchors
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(DownloadError::UnknownAnchor(id.index()))?;
        element.remove();
        Ok(())
    }

    fn revoke_object_url(&mut self, url: &str) -> Result<(), DownloadError> {
        web_sys::Url::revoke_object_url(url).map_err(js_err)
    }
}
