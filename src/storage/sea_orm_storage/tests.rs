use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::entity::registry::ENTITIES;
use crate::errors::CrmError;
use crate::models::{
    choices::{Attendance, ClassType, CustomerStatus, Intention, Score, Source},
    classes::requests::{
        CreateBranchRequest, CreateClassListRequest, CreateCourseRecordRequest, CreateCourseRequest,
    },
    common::pagination::MAX_PAGE,
    customers::requests::{CreateCustomerRequest, CreateFollowUpRequest, CustomerListQuery},
    staff::requests::{CreateMenuRequest, CreateRoleRequest, CreateUserProfileRequest},
    students::requests::{
        CreateEnrollmentRequest, CreatePaymentRequest, CreateStudyRecordRequest,
        UpdateEnrollmentContractRequest, UpdateStudyRecordRequest,
    },
};
use crate::storage::Storage;
use chrono::Utc;
use sea_orm::ConnectionTrait;

async fn memory_storage() -> SeaOrmStorage {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 30,
    };
    SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database")
}

struct Fixture {
    consultant_id: i64,
    course_id: i64,
    branch_id: i64,
}

async fn fixture(storage: &SeaOrmStorage) -> Fixture {
    let consultant = storage
        .create_user_profile(CreateUserProfileRequest {
            name: "王老师".to_string(),
            role_ids: vec![],
        })
        .await
        .unwrap();
    let course = storage
        .create_course(CreateCourseRequest {
            name: "Linux101".to_string(),
            price: 8000,
            period: 5,
            outline: "Linux 基础".to_string(),
        })
        .await
        .unwrap();
    let branch = storage
        .create_branch(CreateBranchRequest {
            name: "北京".to_string(),
            addr: "海淀区".to_string(),
        })
        .await
        .unwrap();
    Fixture {
        consultant_id: consultant.id,
        course_id: course.id,
        branch_id: branch.id,
    }
}

fn customer_request(f: &Fixture, qq: &str) -> CreateCustomerRequest {
    CreateCustomerRequest {
        name: None,
        qq: qq.to_string(),
        qq_name: "小王".to_string(),
        phone: None,
        source: Source::QqGroup,
        referral_from: None,
        consult_course_id: f.course_id,
        content: "咨询 Linux 课程".to_string(),
        status: None,
        consultant_id: f.consultant_id,
        memo: None,
        tag_ids: vec![],
    }
}

fn class_request(f: &Fixture, semester: i32) -> CreateClassListRequest {
    CreateClassListRequest {
        branch_id: f.branch_id,
        course_id: f.course_id,
        class_type: ClassType::InPersonWeekend,
        semester,
        teacher_ids: vec![f.consultant_id],
        start_date: Utc::now(),
        end_date: None,
    }
}

fn course_record_request(class_list_id: i64, teacher_id: i64, day_num: i32) -> CreateCourseRecordRequest {
    CreateCourseRecordRequest {
        class_list_id,
        day_num,
        teacher_id,
        has_homework: None,
        homework_title: Some("文件系统".to_string()),
        homework_content: "整理常用命令".to_string(),
        outline: "目录结构与权限".to_string(),
    }
}

fn enrollment_request(f: &Fixture, customer_id: i64, class_list_id: i64) -> CreateEnrollmentRequest {
    CreateEnrollmentRequest {
        customer_id,
        class_list_id,
        consultant_id: f.consultant_id,
        contract_agreed: false,
        contract_approved: false,
    }
}

fn assert_unique_violation(err: CrmError) {
    assert!(
        matches!(err, CrmError::UniqueViolation(_)),
        "expected unique violation, got {err:?}"
    );
}

#[tokio::test]
async fn test_all_registered_tables_exist() {
    let storage = memory_storage().await;
    let stats = storage.table_stats().await.unwrap();
    assert_eq!(stats.len(), ENTITIES.len());
    assert!(stats.iter().all(|s| s.rows == 0));
}

#[tokio::test]
async fn test_end_to_end_enrollment() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let course = storage.get_course_by_name("Linux101").await.unwrap().unwrap();
    assert_eq!(course.id, f.course_id);

    let customer = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    assert_eq!(customer.status, CustomerStatus::NotEnrolled);
    assert_eq!(customer.consult_course_id, course.id);

    let follow_up = storage
        .create_follow_up(CreateFollowUpRequest {
            customer_id: customer.id,
            consultant_id: f.consultant_id,
            content: "两周内报名".to_string(),
            intention: Intention::WithinTwoWeeks,
        })
        .await
        .unwrap();
    assert_eq!(
        storage.follow_up_label(follow_up.id).await.unwrap().as_deref(),
        Some("<12345 : 0>")
    );

    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    assert_eq!(
        storage.class_list_label(class_list.id).await.unwrap().as_deref(),
        Some("北京 Linux101 1")
    );

    let enrollment = storage
        .create_enrollment(enrollment_request(&f, customer.id, class_list.id))
        .await
        .unwrap();
    assert!(!enrollment.contract_agreed);
    assert!(!enrollment.contract_approved);
    assert_eq!(
        storage.enrollment_label(enrollment.id).await.unwrap().as_deref(),
        Some("12345 北京 Linux101 1")
    );

    let err = storage
        .create_enrollment(enrollment_request(&f, customer.id, class_list.id))
        .await
        .unwrap_err();
    assert_unique_violation(err);
}

#[tokio::test]
async fn test_duplicate_customer_qq() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    let err = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
    assert_unique_violation(err);
}

#[tokio::test]
async fn test_duplicate_class_list() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    storage.create_class_list(class_request(&f, 1)).await.unwrap();
    storage.create_class_list(class_request(&f, 2)).await.unwrap();
    let err = storage
        .create_class_list(class_request(&f, 1))
        .await
        .unwrap_err();
    assert_unique_violation(err);
}

#[tokio::test]
async fn test_study_record_defaults_and_uniqueness() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let customer = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    let enrollment = storage
        .create_enrollment(enrollment_request(&f, customer.id, class_list.id))
        .await
        .unwrap();
    let record = storage
        .create_course_record(course_record_request(class_list.id, f.consultant_id, 1))
        .await
        .unwrap();
    assert!(record.has_homework);
    assert_eq!(record.date, Utc::now().date_naive());
    assert_eq!(
        storage.course_record_label(record.id).await.unwrap().as_deref(),
        Some("北京 Linux101 1 1")
    );

    let study = storage
        .create_study_record(CreateStudyRecordRequest {
            enrollment_id: enrollment.id,
            course_record_id: record.id,
            attendance: None,
            score: None,
            memo: None,
        })
        .await
        .unwrap();
    assert_eq!(study.attendance, Attendance::CheckedIn);
    assert_eq!(study.score, Score::NotApplicable);
    assert_eq!(
        storage.study_record_label(study.id).await.unwrap().as_deref(),
        Some("12345 北京 Linux101 1 北京 Linux101 1 1 0")
    );

    let err = storage
        .create_study_record(CreateStudyRecordRequest {
            enrollment_id: enrollment.id,
            course_record_id: record.id,
            attendance: Some(Attendance::Late),
            score: None,
            memo: None,
        })
        .await
        .unwrap_err();
    assert_unique_violation(err);

    let graded = storage
        .update_study_record(
            study.id,
            UpdateStudyRecordRequest {
                attendance: None,
                score: Some(Score::D),
                memo: Some("作业不完整".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(graded.score, Score::D);
    assert_eq!(graded.attendance, Attendance::CheckedIn);
    assert_eq!(graded.memo.as_deref(), Some("作业不完整"));
    assert_eq!(storage.list_study_records(enrollment.id).await.unwrap(), vec![graded]);

    // 空白备注清空字段
    let cleared = storage
        .update_study_record(
            study.id,
            UpdateStudyRecordRequest {
                memo: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.memo, None);
    assert_eq!(cleared.score, Score::D);
}

#[tokio::test]
async fn test_duplicate_course_record_day() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    storage
        .create_course_record(course_record_request(class_list.id, f.consultant_id, 1))
        .await
        .unwrap();
    storage
        .create_course_record(course_record_request(class_list.id, f.consultant_id, 2))
        .await
        .unwrap();
    let err = storage
        .create_course_record(course_record_request(class_list.id, f.consultant_id, 1))
        .await
        .unwrap_err();
    assert_unique_violation(err);
}

#[tokio::test]
async fn test_invalid_score_rejected_by_check_constraint() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let customer = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    let enrollment = storage
        .create_enrollment(enrollment_request(&f, customer.id, class_list.id))
        .await
        .unwrap();
    let record = storage
        .create_course_record(course_record_request(class_list.id, f.consultant_id, 1))
        .await
        .unwrap();

    let insert = |score: i16| {
        format!(
            "INSERT INTO study_records (enrollment_id, course_record_id, attendance, score, date) \
             VALUES ({}, {}, 0, {score}, '2024-03-01')",
            enrollment.id, record.id
        )
    };

    assert!(
        storage
            .connection()
            .execute_unprepared(&insert(55))
            .await
            .is_err()
    );
    assert!(
        storage
            .connection()
            .execute_unprepared(&insert(-100))
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_out_of_range_small_integers_rejected_by_check_constraint() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;
    let customer = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    let db = storage.connection();

    let course = |price: i32, period: i32| {
        format!(
            "INSERT INTO courses (name, price, period, outline) \
             VALUES ('Python{price}_{period}', {price}, {period}, '大纲')"
        )
    };
    assert!(db.execute_unprepared(&course(-5, 3)).await.is_err());
    assert!(db.execute_unprepared(&course(100, -1)).await.is_err());
    assert!(db.execute_unprepared(&course(40000, 3)).await.is_err());
    assert!(db.execute_unprepared(&course(32767, 0)).await.is_ok());

    let payment = |amount: i32| {
        format!(
            "INSERT INTO payments (customer_id, course_id, amount, consultant_id, created_at) \
             VALUES ({}, {}, {amount}, {}, 0)",
            customer.id, f.course_id, f.consultant_id
        )
    };
    assert!(db.execute_unprepared(&payment(40000)).await.is_err());
    assert!(db.execute_unprepared(&payment(-1)).await.is_err());
    assert!(db.execute_unprepared(&payment(0)).await.is_ok());
}

#[tokio::test]
async fn test_customer_tags_are_idempotent() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let vip = storage.create_tag("VIP").await.unwrap();
    let hot = storage.create_tag("高意向").await.unwrap();
    assert_unique_violation(storage.create_tag("VIP").await.unwrap_err());

    let mut req = customer_request(&f, "12345");
    req.tag_ids = vec![vip.id, vip.id];
    let customer = storage.create_customer(req).await.unwrap();
    assert_eq!(storage.list_customer_tags(customer.id).await.unwrap(), vec![vip.clone()]);

    assert!(!storage.add_customer_tag(customer.id, vip.id).await.unwrap());
    assert!(storage.add_customer_tag(customer.id, hot.id).await.unwrap());
    assert_eq!(
        storage.list_customer_tags(customer.id).await.unwrap(),
        vec![vip.clone(), hot]
    );

    assert!(storage.remove_customer_tag(customer.id, vip.id).await.unwrap());
    assert!(!storage.remove_customer_tag(customer.id, vip.id).await.unwrap());
    assert_eq!(storage.list_customer_tags(customer.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unknown_tag_is_foreign_key_violation() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let mut req = customer_request(&f, "12345");
    req.tag_ids = vec![999];
    let err = storage.create_customer(req).await.unwrap_err();
    assert!(matches!(err, CrmError::ForeignKeyViolation(_)), "got {err:?}");

    // 事务回滚，客户未被创建
    assert!(storage.get_customer_by_qq("12345").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_customers_filters_and_search() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    for qq in ["10001", "10002", "20001"] {
        storage.create_customer(customer_request(&f, qq)).await.unwrap();
    }
    let enrolled = storage.get_customer_by_qq("20001").await.unwrap().unwrap();
    let updated = storage
        .update_customer_status(enrolled.id, CustomerStatus::Enrolled)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, CustomerStatus::Enrolled);

    let all = storage
        .list_customers_with_pagination(CustomerListQuery::default())
        .await
        .unwrap();
    assert_eq!(all.pagination.total, 3);

    let search = storage
        .list_customers_with_pagination(CustomerListQuery {
            search: Some("1000".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(search.items.len(), 2);

    let by_status = storage
        .list_customers_with_pagination(CustomerListQuery {
            status: Some(CustomerStatus::Enrolled),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_status.items.len(), 1);
    assert_eq!(by_status.items[0].qq, "20001");

    // 通配符按字面匹配
    let wildcard = storage
        .list_customers_with_pagination(CustomerListQuery {
            search: Some("%".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(wildcard.items.is_empty());

    let paged = storage
        .list_customers_with_pagination(CustomerListQuery {
            page: Some(2),
            size: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(paged.items.len(), 1);
    assert_eq!(paged.pagination.total_pages, 2);

    // 超大页码不溢出，返回空页
    let far = storage
        .list_customers_with_pagination(CustomerListQuery {
            page: Some(i64::MAX),
            size: Some(100),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(far.items.is_empty());
    assert_eq!(far.pagination.total, 3);
    assert_eq!(far.pagination.page, MAX_PAGE);
}

#[tokio::test]
async fn test_payment_and_contract_defaults() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let customer = storage
        .create_customer(customer_request(&f, "12345"))
        .await
        .unwrap();
    let payment = storage
        .create_payment(CreatePaymentRequest {
            customer_id: customer.id,
            course_id: f.course_id,
            amount: None,
            consultant_id: f.consultant_id,
        })
        .await
        .unwrap();
    assert_eq!(payment.amount, 500);
    assert_eq!(
        storage.payment_label(payment.id).await.unwrap().as_deref(),
        Some("12345 500")
    );
    assert_eq!(
        storage.list_payments_for_customer(customer.id).await.unwrap(),
        vec![payment]
    );

    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    let enrollment = storage
        .create_enrollment(enrollment_request(&f, customer.id, class_list.id))
        .await
        .unwrap();
    let updated = storage
        .update_enrollment_contract(
            enrollment.id,
            UpdateEnrollmentContractRequest {
                contract_agreed: Some(true),
                contract_approved: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert!(updated.contract_agreed);
    assert!(!updated.contract_approved);

    assert!(
        storage
            .update_enrollment_contract(9999, UpdateEnrollmentContractRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_user_menus_are_deduplicated() {
    let storage = memory_storage().await;

    let customers = storage
        .create_menu(CreateMenuRequest {
            name: "客户库".to_string(),
            url_name: "customer_list".to_string(),
        })
        .await
        .unwrap();
    let classes = storage
        .create_menu(CreateMenuRequest {
            name: "班级".to_string(),
            url_name: "class_list".to_string(),
        })
        .await
        .unwrap();

    let sales = storage
        .create_role(CreateRoleRequest {
            name: "销售".to_string(),
            menu_ids: vec![customers.id],
        })
        .await
        .unwrap();
    let teacher = storage
        .create_role(CreateRoleRequest {
            name: "讲师".to_string(),
            menu_ids: vec![customers.id, classes.id],
        })
        .await
        .unwrap();
    assert!(!storage.grant_menu(sales.id, customers.id).await.unwrap());
    assert_eq!(storage.list_role_menus(teacher.id).await.unwrap().len(), 2);

    let user = storage
        .create_user_profile(CreateUserProfileRequest {
            name: "李老师".to_string(),
            role_ids: vec![sales.id],
        })
        .await
        .unwrap();
    assert!(storage.assign_role(user.id, teacher.id).await.unwrap());
    assert!(!storage.assign_role(user.id, teacher.id).await.unwrap());
    assert_eq!(storage.list_user_roles(user.id).await.unwrap().len(), 2);

    let menus = storage.list_user_menus(user.id).await.unwrap();
    assert_eq!(menus, vec![customers, classes]);
}

#[tokio::test]
async fn test_class_teachers_and_admins() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let class_list = storage.create_class_list(class_request(&f, 1)).await.unwrap();
    assert_eq!(storage.list_class_teachers(class_list.id).await.unwrap().len(), 1);
    assert!(!storage.add_class_teacher(class_list.id, f.consultant_id).await.unwrap());

    assert_eq!(storage.count_admins().await.unwrap(), 0);
    let admin = storage.create_admin("admin").await.unwrap();
    assert_eq!(admin.to_string(), "admin");
    assert_eq!(storage.count_admins().await.unwrap(), 1);
}

#[tokio::test]
async fn test_validation_and_missing_records() {
    let storage = memory_storage().await;
    let f = fixture(&storage).await;

    let mut req = customer_request(&f, "12345");
    req.qq_name = "名".repeat(33);
    let err = storage.create_customer(req).await.unwrap_err();
    assert!(matches!(err, CrmError::Validation(_)));

    assert!(storage.customer_label(42).await.unwrap().is_none());
    assert!(storage.get_enrollment_by_id(42).await.unwrap().is_none());
    let err = storage.list_customer_tags(42).await.unwrap_err();
    assert_eq!(err.code(), "E008");
}
