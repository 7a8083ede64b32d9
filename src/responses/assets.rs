use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::fs;
use std::path::Path;

/// Serves files under the repository `static/` directory.
pub fn serve_asset(request_path: &str) -> ResultResp {
    let rel = request_path.trim_start_matches("/static/");

    if rel.is_empty() || rel.split('/').any(|part| part == "..") {
        return Err(ServerError::NotFound);
    }

    let file = Path::new("static").join(rel);
    let bytes = fs::read(&file).map_err(|_| ServerError::NotFound)?;
    let mime = mime_for(&file);

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime.as_ref())
        .body(Body::new(bytes))
        .unwrap();

    Ok(resp)
}

fn mime_for(path: &Path) -> mime::Mime {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("svg") => mime::IMAGE_SVG,
        Some("png") => mime::IMAGE_PNG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
