use actix_web::{http::header, HttpRequest, HttpResponse};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

/// Characters that cannot appear verbatim inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `201 Created` pointing at `<request path>/<segments...>`.
pub fn created(req: &HttpRequest, segments: &[&str], body: impl Serialize) -> HttpResponse {
    let mut location = req.path().trim_end_matches('/').to_owned();
    for segment in segments {
        location.push('/');
        location.extend(utf8_percent_encode(segment, SEGMENT));
    }
    HttpResponse::Created()
        .append_header((header::LOCATION, location))
        .json(body)
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn location_escapes_segments() {
        let req = TestRequest::post().uri("/api/v1/blueprints").to_http_request();
        let res = created(&req, &["ana maria", "a/b"], ());
        assert_eq!(
            res.headers().get(header::LOCATION).unwrap(),
            "/api/v1/blueprints/ana%20maria/a%2Fb"
        );
    }
}
