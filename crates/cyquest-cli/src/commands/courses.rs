use anyhow::Result;

use cyquest_application::{AppContext, EnrollmentServiceError};

use super::gate_student;

pub async fn list(ctx: &AppContext) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    let enrollments = ctx.enrollments.list().await?;
    println!("📚 Course catalog");
    for course in ctx.enrollments.courses() {
        let marker = if enrollments.contains(&course.id) {
            "[enrolled]"
        } else {
            ""
        };
        println!(
            "  {:<20} difficulty {}  {} {}",
            course.id, course.difficulty, course.title, marker
        );
    }
    Ok(())
}

pub async fn enroll(ctx: &AppContext, course_id: &str) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.enrollments.enroll(course_id).await {
        Ok(()) => println!("✅ Enrolled in {}", course_id),
        Err(EnrollmentServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(EnrollmentServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}

pub async fn drop(ctx: &AppContext, course_id: &str) -> Result<()> {
    if gate_student(ctx).await?.is_none() {
        return Ok(());
    }

    match ctx.enrollments.drop_course(course_id).await {
        Ok(()) => println!("✅ Dropped {}", course_id),
        Err(EnrollmentServiceError::Rejected(rejection)) => println!("❌ {}", rejection),
        Err(EnrollmentServiceError::Storage(e)) => return Err(e.into()),
    }
    Ok(())
}
