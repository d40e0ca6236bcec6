use chrono::NaiveDate;
use hrms_core::db::open_db_in_memory;
use hrms_core::{
    AggregationService, AttendanceStatus, DashboardStats, EmployeeTotals, HrmsStore, NewEmployee,
    RepoError, SqliteAggregationRepository,
};
use rusqlite::Connection;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

fn hire(store: &HrmsStore<'_>, id: &str, name: &str, department: &str) {
    store
        .employees
        .create(&NewEmployee::new(
            id,
            name,
            format!("{}@example.com", id.to_lowercase()),
            department,
        ))
        .unwrap();
}

#[test]
fn dashboard_with_no_employees_has_zero_rate() {
    let conn = open_db_in_memory().unwrap();
    let service = AggregationService::new(SqliteAggregationRepository::try_new(&conn).unwrap());

    let stats = service.dashboard_stats(today()).unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            total_employees: 0,
            present_today: 0,
            absent_today: 0,
            attendance_rate: 0,
            department_count: 0,
        }
    );
}

#[test]
fn dashboard_three_of_four_present_is_seventy_five() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    hire(&store, "E1", "Ada", "Eng");
    hire(&store, "E2", "Bob", "Eng");
    hire(&store, "E3", "Cy", "Ops");
    hire(&store, "E4", "Di", "Sales");
    for id in ["E1", "E2", "E3"] {
        store
            .attendance
            .mark(id, today(), AttendanceStatus::Present)
            .unwrap();
    }
    store
        .attendance
        .mark("E4", today(), AttendanceStatus::Absent)
        .unwrap();
    // Other days never leak into today's figures.
    store
        .attendance
        .mark("E4", today().pred_opt().unwrap(), AttendanceStatus::Present)
        .unwrap();

    let stats = store.stats.dashboard_stats(today()).unwrap();
    assert_eq!(stats.total_employees, 4);
    assert_eq!(stats.present_today, 3);
    assert_eq!(stats.absent_today, 1);
    assert_eq!(stats.attendance_rate, 75);
    assert_eq!(stats.department_count, 3);
}

#[test]
fn dashboard_rate_rounds_half_to_even() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    for idx in 1..=8 {
        hire(&store, &format!("E{idx}"), &format!("Person {idx}"), "Eng");
    }

    // 1 of 8 = 12.5% -> 12
    store
        .attendance
        .mark("E1", today(), AttendanceStatus::Present)
        .unwrap();
    assert_eq!(store.stats.dashboard_stats(today()).unwrap().attendance_rate, 12);

    // 3 of 8 = 37.5% -> 38
    for id in ["E2", "E3"] {
        store
            .attendance
            .mark(id, today(), AttendanceStatus::Present)
            .unwrap();
    }
    assert_eq!(store.stats.dashboard_stats(today()).unwrap().attendance_rate, 38);
}

#[test]
fn dashboard_rate_drops_when_mark_is_overwritten() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    hire(&store, "E1", "Ada", "Eng");
    hire(&store, "E2", "Bob", "Eng");
    store
        .attendance
        .mark("E1", today(), AttendanceStatus::Present)
        .unwrap();
    store
        .attendance
        .mark("E2", today(), AttendanceStatus::Present)
        .unwrap();
    assert_eq!(store.stats.dashboard_stats(today()).unwrap().attendance_rate, 100);

    store
        .attendance
        .mark("E2", today(), AttendanceStatus::Absent)
        .unwrap();
    let stats = store.stats.dashboard_stats(today()).unwrap();
    assert_eq!(stats.present_today, 1);
    assert_eq!(stats.absent_today, 1);
    assert_eq!(stats.attendance_rate, 50);
}

#[test]
fn employee_totals_are_recomputed_each_call() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    hire(&store, "E1", "Ada", "Eng");
    hire(&store, "E2", "Bob", "Eng");

    assert_eq!(
        store.stats.employee_totals("E1").unwrap(),
        EmployeeTotals::default()
    );

    let first = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    store
        .attendance
        .mark("E1", first, AttendanceStatus::Present)
        .unwrap();
    store
        .attendance
        .mark("E1", first.succ_opt().unwrap(), AttendanceStatus::Absent)
        .unwrap();
    store
        .attendance
        .mark("E2", first, AttendanceStatus::Absent)
        .unwrap();

    assert_eq!(
        store.stats.employee_totals("E1").unwrap(),
        EmployeeTotals {
            present_count: 1,
            absent_count: 1,
        }
    );
    assert_eq!(
        store.stats.employee_totals(" E2 ").unwrap(),
        EmployeeTotals {
            present_count: 0,
            absent_count: 1,
        }
    );
}

#[test]
fn employee_totals_for_unknown_employee_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();

    assert!(matches!(
        store.stats.employee_totals("ghost"),
        Err(RepoError::EmployeeNotFound(id)) if id == "ghost"
    ));
}

#[test]
fn directory_lists_every_employee_with_totals() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    hire(&store, "E2", "Bob", "Eng");
    hire(&store, "E1", "Ada", "Ops");
    store
        .attendance
        .mark("E2", today(), AttendanceStatus::Present)
        .unwrap();

    let directory = store.stats.employee_directory().unwrap();
    let rows: Vec<(&str, u64, u64)> = directory
        .iter()
        .map(|s| {
            (
                s.employee.employee_id.as_str(),
                s.totals.present_count,
                s.totals.absent_count,
            )
        })
        .collect();
    assert_eq!(rows, vec![("E1", 0, 0), ("E2", 1, 0)]);
}

#[test]
fn deleting_employee_updates_aggregates() {
    let conn = open_db_in_memory().unwrap();
    let store = HrmsStore::try_new(&conn).unwrap();
    hire(&store, "E1", "Ada", "Eng");
    hire(&store, "E2", "Bob", "Ops");
    store
        .attendance
        .mark("E1", today(), AttendanceStatus::Present)
        .unwrap();
    store
        .attendance
        .mark("E2", today(), AttendanceStatus::Absent)
        .unwrap();

    store.employees.delete("E1").unwrap();

    let stats = store.stats.dashboard_stats(today()).unwrap();
    assert_eq!(stats.total_employees, 1);
    assert_eq!(stats.present_today, 0);
    assert_eq!(stats.absent_today, 1);
    assert_eq!(stats.attendance_rate, 0);
    assert_eq!(stats.department_count, 1);
}

#[test]
fn store_requires_migrated_connection() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(matches!(
        HrmsStore::try_new(&conn),
        Err(RepoError::UninitializedConnection { .. })
    ));
}
