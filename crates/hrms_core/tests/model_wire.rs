use chrono::NaiveDate;
use hrms_core::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, DashboardStats, Employee,
    EmployeeSummary, EmployeeTotals,
};
use uuid::Uuid;

fn sample_employee() -> Employee {
    Employee {
        employee_id: "E-001".to_string(),
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        department: "Engineering".to_string(),
        created_at: 1_717_200_000_000,
    }
}

#[test]
fn attendance_record_uses_iso_date_and_capitalized_status() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let record = AttendanceRecord {
        id,
        employee_id: "E-001".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        status: AttendanceStatus::Present,
    };

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["date"], "2024-06-03");
    assert_eq!(json["status"], "Present");

    let entry = AttendanceEntry {
        record,
        employee_name: "Ada Lovelace".to_string(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["employee_id"], "E-001");
    assert_eq!(json["employee_name"], "Ada Lovelace");
    let decoded: AttendanceEntry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}

#[test]
fn unknown_status_fails_to_deserialize() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "employee_id": "E-001",
        "date": "2024-06-03",
        "status": "Late"
    });
    assert!(serde_json::from_value::<AttendanceRecord>(value).is_err());
}

#[test]
fn employee_summary_flattens_totals() {
    let summary = EmployeeSummary {
        employee: sample_employee(),
        totals: EmployeeTotals {
            present_count: 4,
            absent_count: 1,
        },
    };

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["employee_id"], "E-001");
    assert_eq!(json["present_count"], 4);
    assert_eq!(json["absent_count"], 1);
}

#[test]
fn dashboard_stats_field_names() {
    let stats = DashboardStats {
        total_employees: 4,
        present_today: 3,
        absent_today: 1,
        attendance_rate: 75,
        department_count: 2,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "total_employees": 4,
            "present_today": 3,
            "absent_today": 1,
            "attendance_rate": 75,
            "department_count": 2
        })
    );
}
