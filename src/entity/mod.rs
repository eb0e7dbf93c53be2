//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 所有实体都在 registry 中显式登记。

pub mod registry;

pub mod admins;
pub mod branches;
pub mod class_list_teachers;
pub mod class_lists;
pub mod course_records;
pub mod courses;
pub mod customer_follow_ups;
pub mod customer_tags;
pub mod customers;
pub mod enrollments;
pub mod menus;
pub mod payments;
pub mod role_menus;
pub mod roles;
pub mod study_records;
pub mod tags;
pub mod user_profile_roles;
pub mod user_profiles;
