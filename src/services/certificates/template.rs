use crate::models::certificates::entities::Certificate;

/// 生成打印版证书 HTML（A4 横版，浏览器打印即可存为 PDF）
pub fn generate_certificate_html(certificate: &Certificate, issuer_name: &str) -> String {
    let student_name = escape_html(&certificate.student_name);
    let course_name = escape_html(&certificate.course_name);
    let instructor_name = escape_html(&certificate.instructor_name);
    let issuer_name = escape_html(issuer_name);
    let serial_number = escape_html(&certificate.serial_number);
    let issued_date = certificate.issued_at.format("%Y-%m-%d");
    let workload = certificate.workload_hours;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Certificate of Completion</title>
  <style>
    @page {{
      size: A4 landscape;
      margin: 20px;
    }}
    @media print {{
      body {{
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }}
    }}
    body {{
      font-family: 'Arial', sans-serif;
      margin: 0;
      padding: 40px;
      background: #fff;
      color: #000;
    }}
    .certificate {{
      border: 20px solid #1d4ed8;
      padding: 40px;
      text-align: center;
      position: relative;
      background: #fff;
    }}
    .header {{
      font-size: 48px;
      color: #1d4ed8;
      margin-bottom: 40px;
      font-weight: bold;
    }}
    .content {{
      font-size: 24px;
      line-height: 1.6;
      margin-bottom: 40px;
      color: #000;
    }}
    .student-name {{
      font-size: 36px;
      font-weight: bold;
      color: #1d4ed8;
      margin: 20px 0;
    }}
    .course-name {{
      font-size: 30px;
      font-weight: bold;
      margin: 20px 0;
      color: #000;
    }}
    .footer {{
      margin-top: 60px;
      font-size: 18px;
      color: #000;
    }}
    .signature {{
      margin-top: 40px;
      border-top: 2px solid #000;
      display: inline-block;
      padding: 10px 40px;
      color: #000;
    }}
    .issuer {{
      margin-top: 20px;
      font-size: 16px;
      color: #666;
    }}
    .metadata {{
      position: absolute;
      bottom: 20px;
      right: 20px;
      font-size: 14px;
      color: #666;
      text-align: right;
    }}
  </style>
</head>
<body>
  <div class="certificate">
    <div class="header">Certificate of Completion</div>

    <div class="content">
      This is to certify that

      <div class="student-name">{student_name}</div>

      has successfully completed the course

      <div class="course-name">{course_name}</div>

      with a workload of {workload} hours,
      taught by {instructor_name}
    </div>

    <div class="footer">
      <div class="signature">
        {instructor_name}<br>
        Instructor
      </div>
      <div class="issuer">{issuer_name}</div>
    </div>

    <div class="metadata">
      Issued on: {issued_date}<br>
      Certificate No.: {serial_number}
    </div>
  </div>
</body>
</html>
"#
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_certificate() -> Certificate {
        Certificate {
            id: 1,
            user_id: 2,
            course_id: 3,
            course_name: "Rust 入门".to_string(),
            student_name: "张三".to_string(),
            instructor_name: "李四".to_string(),
            serial_number: "CERT-A1B2C3D4".to_string(),
            workload_hours: 40,
            issued_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_template_contains_snapshot_fields() {
        let html = generate_certificate_html(&sample_certificate(), "在线学习平台");
        assert!(html.contains("张三"));
        assert!(html.contains("Rust 入门"));
        assert!(html.contains("李四"));
        assert!(html.contains("CERT-A1B2C3D4"));
        assert!(html.contains("40 hours"));
        assert!(html.contains("在线学习平台"));
    }

    #[test]
    fn test_template_escapes_html() {
        let mut certificate = sample_certificate();
        certificate.student_name = "<script>alert(1)</script>".to_string();
        let html = generate_certificate_html(&certificate, "LMS");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
