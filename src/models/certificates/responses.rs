use super::entities::Certificate;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 证书响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateResponse {
    pub certificate: Certificate,
}

// 证书列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateListResponse {
    pub items: Vec<Certificate>,
    pub pagination: PaginationInfo,
}

// 证书校验响应（凭编号公开查询）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateVerificationResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
}
