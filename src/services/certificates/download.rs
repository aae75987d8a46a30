use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use actix_web::http::header::{CONTENT_DISPOSITION, ContentDisposition, DispositionParam, DispositionType};

use super::{CertificateService, get::load_owned_certificate, template::generate_certificate_html};
use crate::config::AppConfig;

pub async fn download_certificate(
    service: &CertificateService,
    request: &HttpRequest,
    certificate_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let certificate = match load_owned_certificate(&storage, request, certificate_id).await {
        Ok(certificate) => certificate,
        Err(resp) => return Ok(resp),
    };

    let config = AppConfig::get();
    let html = generate_certificate_html(&certificate, &config.certificate.issuer_name);
    let filename = format!("certificate-{}.html", certificate.serial_number);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((
            CONTENT_DISPOSITION,
            ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(filename)],
            },
        ))
        .body(html))
}
