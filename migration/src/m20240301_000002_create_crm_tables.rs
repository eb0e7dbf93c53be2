use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// 枚举字段允许的取值，与 models::choices 保持一致
const SOURCE_CODES: [i32; 7] = [0, 1, 2, 3, 4, 5, 6];
const CUSTOMER_STATUS_CODES: [i32; 2] = [0, 1];
const INTENTION_CODES: [i32; 6] = [0, 1, 2, 3, 4, 5];
const CLASS_TYPE_CODES: [i32; 3] = [0, 1, 2];
const ATTENDANCE_CODES: [i32; 4] = [0, 1, 2, 3];
const SCORE_CODES: [i32; 11] = [100, 90, 85, 80, 75, 70, 60, 40, -50, -100, 0];
// 非负小整数的取值上限
const POSITIVE_SMALL_MAX: i32 = 32767;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建客户信息表
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(32).null())
                    .col(
                        ColumnDef::new(Customers::Qq)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Customers::QqName).string_len(32).not_null())
                    .col(ColumnDef::new(Customers::Phone).string_len(64).null())
                    .col(
                        ColumnDef::new(Customers::Source)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(Customers::Source).is_in(SOURCE_CODES)),
                    )
                    .col(
                        ColumnDef::new(Customers::ReferralFrom)
                            .string_len(64)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Customers::ConsultCourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::Content).text().not_null())
                    .col(
                        ColumnDef::new(Customers::Status)
                            .small_integer()
                            .not_null()
                            .default(1)
                            .check(Expr::col(Customers::Status).is_in(CUSTOMER_STATUS_CODES)),
                    )
                    .col(
                        ColumnDef::new(Customers::ConsultantId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::Memo).text().null())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Customers::Table, Customers::ConsultCourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Customers::Table, Customers::ConsultantId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 客户-标签关联表
        manager
            .create_table(
                Table::create()
                    .table(CustomerTags::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerTags::CustomerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomerTags::TagId).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(CustomerTags::CustomerId)
                            .col(CustomerTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CustomerTags::Table, CustomerTags::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CustomerTags::Table, CustomerTags::TagId)
                            .to(Tags::Table, Tags::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建客户跟进表
        manager
            .create_table(
                Table::create()
                    .table(CustomerFollowUps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerFollowUps::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CustomerFollowUps::CustomerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerFollowUps::ConsultantId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CustomerFollowUps::Content).text().not_null())
                    .col(
                        ColumnDef::new(CustomerFollowUps::Intention)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(CustomerFollowUps::Intention).is_in(INTENTION_CODES)),
                    )
                    .col(
                        ColumnDef::new(CustomerFollowUps::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CustomerFollowUps::Table, CustomerFollowUps::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CustomerFollowUps::Table, CustomerFollowUps::ConsultantId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(ClassLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassLists::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassLists::BranchId).big_integer().not_null())
                    .col(ColumnDef::new(ClassLists::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ClassLists::ClassType)
                            .small_integer()
                            .not_null()
                            .check(Expr::col(ClassLists::ClassType).is_in(CLASS_TYPE_CODES)),
                    )
                    .col(
                        ColumnDef::new(ClassLists::Semester)
                            .integer()
                            .not_null()
                            .check(Expr::col(ClassLists::Semester).between(0, POSITIVE_SMALL_MAX)),
                    )
                    .col(ColumnDef::new(ClassLists::StartDate).big_integer().not_null())
                    .col(ColumnDef::new(ClassLists::EndDate).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassLists::Table, ClassLists::BranchId)
                            .to(Branches::Table, Branches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassLists::Table, ClassLists::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 班级-讲师关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassListTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassListTeachers::ClassListId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassListTeachers::UserProfileId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(ClassListTeachers::ClassListId)
                            .col(ClassListTeachers::UserProfileId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassListTeachers::Table, ClassListTeachers::ClassListId)
                            .to(ClassLists::Table, ClassLists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassListTeachers::Table, ClassListTeachers::UserProfileId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生报名表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CustomerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::ClassListId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::ConsultantId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::ContractAgreed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Enrollments::ContractApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::ClassListId)
                            .to(ClassLists::Table, ClassLists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::ConsultantId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建上课记录表
        manager
            .create_table(
                Table::create()
                    .table(CourseRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::ClassListId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::DayNum)
                            .integer()
                            .not_null()
                            .check(Expr::col(CourseRecords::DayNum).between(0, POSITIVE_SMALL_MAX)),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::HasHomework)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::HomeworkTitle)
                            .string_len(128)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CourseRecords::HomeworkContent)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CourseRecords::Outline).text().not_null())
                    .col(ColumnDef::new(CourseRecords::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRecords::Table, CourseRecords::ClassListId)
                            .to(ClassLists::Table, ClassLists::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseRecords::Table, CourseRecords::TeacherId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学习记录表
        manager
            .create_table(
                Table::create()
                    .table(StudyRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyRecords::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(StudyRecords::EnrollmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyRecords::CourseRecordId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(StudyRecords::Attendance)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(StudyRecords::Attendance).is_in(ATTENDANCE_CODES)),
                    )
                    .col(
                        ColumnDef::new(StudyRecords::Score)
                            .small_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(StudyRecords::Score).is_in(SCORE_CODES)),
                    )
                    .col(ColumnDef::new(StudyRecords::Memo).text().null())
                    .col(ColumnDef::new(StudyRecords::Date).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudyRecords::Table, StudyRecords::EnrollmentId)
                            .to(Enrollments::Table, Enrollments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(StudyRecords::Table, StudyRecords::CourseRecordId)
                            .to(CourseRecords::Table, CourseRecords::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缴费记录表
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::CustomerId).big_integer().not_null())
                    .col(ColumnDef::new(Payments::CourseId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Payments::Amount)
                            .integer()
                            .not_null()
                            .default(500)
                            .check(Expr::col(Payments::Amount).between(0, POSITIVE_SMALL_MAX)),
                    )
                    .col(
                        ColumnDef::new(Payments::ConsultantId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::ConsultantId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 联合唯一约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_lists_branch_course_semester")
                    .table(ClassLists::Table)
                    .col(ClassLists::BranchId)
                    .col(ClassLists::CourseId)
                    .col(ClassLists::Semester)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_course_records_class_day")
                    .table(CourseRecords::Table)
                    .col(CourseRecords::ClassListId)
                    .col(CourseRecords::DayNum)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_study_records_enrollment_course_record")
                    .table(StudyRecords::Table)
                    .col(StudyRecords::EnrollmentId)
                    .col(StudyRecords::CourseRecordId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_enrollments_customer_class")
                    .table(Enrollments::Table)
                    .col(Enrollments::CustomerId)
                    .col(Enrollments::ClassListId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 外键查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_consultant_id")
                    .table(Customers::Table)
                    .col(Customers::ConsultantId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_status")
                    .table(Customers::Table)
                    .col(Customers::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customer_follow_ups_customer_id")
                    .table(CustomerFollowUps::Table)
                    .col(CustomerFollowUps::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_customer_id")
                    .table(Payments::Table)
                    .col(Payments::CustomerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseRecords::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassListTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassLists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerFollowUps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CustomerTags::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Branches {
    #[sea_orm(iden = "branches")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Tags {
    #[sea_orm(iden = "tags")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum UserProfiles {
    #[sea_orm(iden = "user_profiles")]
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Customers {
    #[sea_orm(iden = "customers")]
    Table,
    Id,
    Name,
    Qq,
    QqName,
    Phone,
    Source,
    ReferralFrom,
    ConsultCourseId,
    Content,
    Status,
    ConsultantId,
    Memo,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CustomerTags {
    #[sea_orm(iden = "customer_tags")]
    Table,
    CustomerId,
    TagId,
}

#[derive(DeriveIden)]
enum CustomerFollowUps {
    #[sea_orm(iden = "customer_follow_ups")]
    Table,
    Id,
    CustomerId,
    ConsultantId,
    Content,
    Intention,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassLists {
    #[sea_orm(iden = "class_lists")]
    Table,
    Id,
    BranchId,
    CourseId,
    ClassType,
    Semester,
    StartDate,
    EndDate,
}

#[derive(DeriveIden)]
enum ClassListTeachers {
    #[sea_orm(iden = "class_list_teachers")]
    Table,
    ClassListId,
    UserProfileId,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    CustomerId,
    ClassListId,
    ConsultantId,
    ContractAgreed,
    ContractApproved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum CourseRecords {
    #[sea_orm(iden = "course_records")]
    Table,
    Id,
    ClassListId,
    DayNum,
    TeacherId,
    HasHomework,
    HomeworkTitle,
    HomeworkContent,
    Outline,
    Date,
}

#[derive(DeriveIden)]
enum StudyRecords {
    #[sea_orm(iden = "study_records")]
    Table,
    Id,
    EnrollmentId,
    CourseRecordId,
    Attendance,
    Score,
    Memo,
    Date,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    CustomerId,
    CourseId,
    Amount,
    ConsultantId,
    CreatedAt,
}
