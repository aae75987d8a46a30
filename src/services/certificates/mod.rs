pub mod download;
pub mod get;
pub mod issue;
pub mod list;
pub mod template;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::certificates::requests::{CertificateQueryParams, IssueCertificateRequest};
use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn issue_certificate(
        &self,
        issue_data: IssueCertificateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        issue::issue_certificate(self, request, issue_data).await
    }

    pub async fn get_certificate(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_certificate(self, request, certificate_id).await
    }

    pub async fn list_certificates(
        &self,
        params: CertificateQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates(self, request, params).await
    }

    /// 凭编号公开校验，无需登录
    pub async fn verify_certificate(
        &self,
        serial_number: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::verify_certificate(self, request, serial_number).await
    }

    /// 下载打印版证书（A4 横版 HTML）
    pub async fn download_certificate(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        download::download_certificate(self, request, certificate_id).await
    }
}
