use super::SeaOrmStorage;
use crate::entity::certificates::{ActiveModel, Column, Entity as Certificates};
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    certificates::{
        entities::Certificate, requests::CertificateListQuery,
        responses::CertificateListResponse,
    },
    courses::entities::Course,
    users::entities::User,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 签发证书
    ///
    /// (user_id, course_id) 上有唯一索引：并发签发时只有一条插入成功，
    /// 失败方回读已有证书返回，同一课程不会出现两张证书。
    pub async fn issue_certificate_impl(
        &self,
        user: &User,
        course: &Course,
        serial_number: String,
    ) -> Result<(Certificate, bool)> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user.id),
            course_id: Set(course.id),
            course_name: Set(course.title.clone()),
            student_name: Set(user.public_name().to_string()),
            instructor_name: Set(course.instructor_name.clone()),
            serial_number: Set(serial_number),
            workload_hours: Set(course.workload_hours),
            issued_at: Set(now),
            ..Default::default()
        };

        match model.insert(&self.db).await {
            Ok(inserted) => Ok((inserted.into_certificate(), true)),
            Err(e) => {
                let err = LmsError::database_operation(format!("签发证书失败: {e}"));
                if !err.is_unique_violation() {
                    return Err(err);
                }

                let existing = self
                    .get_certificate_by_user_and_course_impl(user.id, course.id)
                    .await?
                    .ok_or_else(|| {
                        LmsError::database_operation("证书冲突但未找到已有记录".to_string())
                    })?;
                Ok((existing, false))
            }
        }
    }

    /// 通过 ID 获取证书
    pub async fn get_certificate_by_id_impl(
        &self,
        certificate_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find_by_id(certificate_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 通过编号获取证书
    pub async fn get_certificate_by_serial_impl(
        &self,
        serial_number: &str,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::SerialNumber.eq(serial_number))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 获取用户在某课程的证书
    pub async fn get_certificate_by_user_and_course_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    /// 分页列出证书
    pub async fn list_certificates_with_pagination_impl(
        &self,
        query: CertificateListQuery,
    ) -> Result<CertificateListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Certificates::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        if let Some(course_id) = query.course_id {
            select = select.filter(Column::CourseId.eq(course_id));
        }

        select = select.order_by_desc(Column::IssuedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书页数失败: {e}")))?;

        let certificates = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询证书列表失败: {e}")))?;

        Ok(CertificateListResponse {
            items: certificates
                .into_iter()
                .map(|m| m.into_certificate())
                .collect(),
            pagination: PaginationInfo::from_counts(page, size, total, pages),
        })
    }
}
