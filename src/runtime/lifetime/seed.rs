//! 初始数据：默认管理员与演示数据

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::models::RecordStatus;
use crate::models::accounts::entities::{AccountRole, CreateAccountRequest};
use crate::models::classrooms::requests::SaveClassroomRequest;
use crate::models::courses::entities::CreateCourseRequest;
use crate::models::students::entities::CreateStudentRequest;
use crate::models::teachers::entities::CreateTeacherRequest;
use crate::storage::{Dataset, Storage};
use crate::utils::password::hash_password;
use crate::utils::validate::password_weaknesses;

// 不是合法的 PHC 串，演示账号无法直接登录
const LOCKED_PASSWORD_HASH: &str = "!locked";

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 账号表为空时创建管理员
pub async fn seed_admin(storage: &dyn Storage, username: &str) {
    match storage.count_accounts().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} account(s), skipping admin seed", count);
            return;
        }
        Ok(_) => info!("No accounts found, creating default admin account..."),
        Err(e) => {
            warn!("Failed to count accounts: {}, skipping admin seed", e);
            return;
        }
    }

    let password = match std::env::var("ADMIN_PASSWORD") {
        Ok(password) => {
            let weaknesses = password_weaknesses(&password);
            if !weaknesses.is_empty() {
                warn!("ADMIN_PASSWORD is weak: {}", weaknesses.join(", "));
            }
            password
        }
        Err(_) => {
            let password = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", password);
            warn!("  Please save this password or set ADMIN_PASSWORD env var");
            warn!("==========================================================");
            password
        }
    };

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let request = CreateAccountRequest {
        username: username.to_string(),
        password_hash,
        role: AccountRole::Admin,
        email: Some(format!("{username}@localhost")),
        phone: None,
        address: None,
    };
    match storage.create_account(request).await {
        Ok(account) => info!(
            "Default admin account created (ID: {}, username: {})",
            account.id, account.username
        ),
        Err(e) => warn!("Failed to create admin account: {}", e),
    }
}

fn demo_account(username: &str, role: AccountRole) -> CreateAccountRequest {
    CreateAccountRequest {
        username: username.to_string(),
        password_hash: LOCKED_PASSWORD_HASH.to_string(),
        role,
        email: Some(format!("{username}@example.com")),
        phone: None,
        address: None,
    }
}

/// 演示数据：两门课程、两名教师、两名学生、两个班级
///
/// 已有班级时跳过。整批数据在一个事务中写入，失败不会留下半套账号。
pub async fn seed_demo_data(storage: &dyn Storage) -> Result<()> {
    if storage.count_classrooms().await? > 0 {
        debug!("Classrooms already present, skipping demo data");
        return Ok(());
    }

    storage.import_dataset(demo_dataset()).await?;
    info!("Demo data seeded");
    Ok(())
}

fn demo_dataset() -> Dataset {
    let today = Utc::now().date_naive();
    let end = today + Duration::days(30);

    let accounts = vec![
        demo_account("teacher1", AccountRole::Teacher),
        demo_account("teacher2", AccountRole::Teacher),
        demo_account("student1", AccountRole::Student),
    ];

    let courses = ["Math", "Physics"]
        .into_iter()
        .map(|name| CreateCourseRequest {
            name: name.to_string(),
            status: RecordStatus::Active,
            start_date: today,
            end_date: end,
        })
        .collect();

    let teachers = [
        (0, "John Doe", "john.doe@example.com"),
        (1, "Jane Smith", "jane.smith@example.com"),
    ]
    .into_iter()
    .map(|(account, full_name, email)| CreateTeacherRequest {
        account_id: account,
        full_name: full_name.to_string(),
        email: Some(email.to_string()),
        phone: None,
        address: None,
        status: RecordStatus::Active,
    })
    .collect();

    let students = [
        ("Nguyen Van A", "a@example.com"),
        ("Tran Thi B", "b@example.com"),
    ]
    .into_iter()
    .map(|(full_name, email)| CreateStudentRequest {
        account_id: 2,
        full_name: full_name.to_string(),
        email: Some(email.to_string()),
        phone: None,
        address: None,
        status: RecordStatus::Active,
    })
    .collect();

    // 第 i 个班级使用第 i 门课程和第 i 名教师
    let classrooms = [
        ("Math Class", "Mon-Wed-Fri 8:00-10:00", "Room 101"),
        ("Physics Class", "Tue-Thu 10:00-12:00", "Room 102"),
    ]
    .into_iter()
    .zip(0..)
    .map(|((class_name, schedule, location), index)| SaveClassroomRequest {
        class_name: class_name.to_string(),
        course_id: index,
        teacher_id: index,
        start_date: today,
        end_date: end,
        schedule: Some(schedule.to_string()),
        location: Some(location.to_string()),
        status: RecordStatus::Active,
    })
    .collect();

    Dataset {
        accounts,
        courses,
        teachers,
        students,
        classrooms,
    }
}
