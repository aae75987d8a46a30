//! 路径参数安全提取器
//!
//! 将 `{course_id}` 之类的路径参数解析为正整数 ID，
//! 解析失败时直接返回统一格式的 400 响应，避免在每个处理函数里重复校验。

use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    ready(extract_positive_i64(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeIDI64("id"),
    SafeCourseIdI64("course_id"),
    SafeModuleIdI64("module_id"),
    SafeLessonIdI64("lesson_id"),
    SafeEnrollmentIdI64("enrollment_id"),
    SafeCertificateIdI64("certificate_id"),
    SafeCategoryIdI64("category_id"),
}

fn extract_positive_i64(req: &HttpRequest, param: &'static str) -> Result<i64, Error> {
    let raw = req.match_info().get(param).unwrap_or_default();

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => {
            let response = actix_web::HttpResponse::BadRequest().json(
                ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("Invalid {param}: '{raw}' is not a positive integer"),
                ),
            );
            Err(InternalError::from_response(format!("Invalid {param}"), response).into())
        }
    }
}
