use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 结业证书
//
// 学员名、课程名、讲师名为签发时的快照：之后改名不影响已签发证书。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct Certificate {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub course_name: String,
    pub student_name: String,
    pub instructor_name: String,
    // 证书编号，形如 CERT-XXXXXXXX，全局唯一
    pub serial_number: String,
    // 学时数
    pub workload_hours: i32,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}
