// src/services/applications_service_tests.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::config::DataMode;
    use crate::domain::{
        ApplicationQuery, ApplicationStatus, CreateApplicationRequest, FileValidationErrorKind,
        ResumeFile, SubmissionReceipt, UpdateApplicationStatusRequest, UploadedResume,
        MAX_RESUME_SIZE,
    };
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::repositories::memory::fixtures::fixture_applications;
    use crate::repositories::MockApplicationRepository;
    use crate::services::ApplicationsService;

    // ========================================================================
    // TEST HELPERS
    // ========================================================================

    fn mock_repo() -> MockApplicationRepository {
        let mut repo = MockApplicationRepository::new();
        repo.expect_mode().return_const(DataMode::Mock);
        repo
    }

    fn service(repo: MockApplicationRepository) -> (ApplicationsService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (ApplicationsService::new(Arc::new(repo), Arc::clone(&bus)), bus)
    }

    fn pdf(size: usize) -> ResumeFile {
        ResumeFile::new("cv.pdf", "application/pdf", vec![0u8; size])
    }

    fn request() -> CreateApplicationRequest {
        CreateApplicationRequest {
            full_name: "Frank Green".to_string(),
            email: "frank@example.com".to_string(),
            phone_number: None,
            linkedin_profile: None,
            portfolio_website: None,
            job_position: "DevOps Engineer".to_string(),
            additional_notes: None,
            resume_url: Some("/files/cv.pdf".to_string()),
            resume_file_name: Some("cv.pdf".to_string()),
        }
    }

    // ========================================================================
    // UPLOAD
    // ========================================================================

    #[tokio::test]
    async fn test_invalid_format_never_reaches_repository() {
        let mut repo = mock_repo();
        repo.expect_upload_resume().never();
        let (service, bus) = service(repo);

        let file = ResumeFile::new("cv.png", "image/png", vec![1, 2, 3]);
        let err = service.upload_resume(&file).await.unwrap_err();

        match err {
            AppError::FileValidation(e) => assert_eq!(e.kind, FileValidationErrorKind::Format),
            other => panic!("expected file validation error, got {:?}", other),
        }
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_file_never_reaches_repository() {
        let mut repo = mock_repo();
        repo.expect_upload_resume().never();
        let (service, _bus) = service(repo);

        let err = service
            .upload_resume(&pdf(MAX_RESUME_SIZE as usize + 1))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::FileValidation(ref e) if e.kind == FileValidationErrorKind::Size
        ));
    }

    #[tokio::test]
    async fn test_upload_emits_event() {
        let mut repo = mock_repo();
        repo.expect_upload_resume().times(1).returning(|file| {
            Ok(UploadedResume {
                url: format!("/files/{}", file.file_name),
                file_name: file.file_name.clone(),
            })
        });
        let (service, bus) = service(repo);

        let uploaded = service.upload_resume(&pdf(1024)).await.unwrap();
        assert_eq!(uploaded.url, "/files/cv.pdf");
        assert_eq!(bus.emitted_types(), vec!["ResumeUploaded"]);
    }

    // ========================================================================
    // SUBMIT & READ
    // ========================================================================

    #[tokio::test]
    async fn test_submit_emits_submitted_event() {
        let mut repo = mock_repo();
        repo.expect_create().times(1).returning(|_| {
            Ok(SubmissionReceipt {
                id: "6".to_string(),
                message: "Application submitted successfully!".to_string(),
                reference_number: Some("REF-2024-001".to_string()),
            })
        });
        let (service, bus) = service(repo);

        let receipt = service.submit_application(&request()).await.unwrap();
        assert_eq!(receipt.reference_number.as_deref(), Some("REF-2024-001"));
        assert_eq!(bus.emitted_types(), vec!["ApplicationSubmitted"]);
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let mut repo = mock_repo();
        repo.expect_list().returning(|_| {
            Err(AppError::Api {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        });
        let (service, _bus) = service(repo);

        let err = service
            .get_applications(&ApplicationQuery::default())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_missing_application_is_not_found() {
        let mut repo = mock_repo();
        repo.expect_get()
            .withf(|id| id == "999")
            .returning(|_| Ok(None));
        let (service, _bus) = service(repo);

        let err = service.get_application("999").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Application not found");
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    #[tokio::test]
    async fn test_status_update_emits_event() {
        let mut repo = mock_repo();
        repo.expect_update_status()
            .withf(|id, _| id == "2")
            .returning(|id, update| {
                let mut application = fixture_applications()
                    .into_iter()
                    .find(|a| a.id == id)
                    .unwrap();
                application.apply_status_update(update);
                Ok(Some(application))
            });
        let (service, bus) = service(repo);

        let update = UpdateApplicationStatusRequest {
            status: ApplicationStatus::Shortlisted,
            admin_notes: Some("Move to final round".to_string()),
        };
        let updated = service.update_application_status("2", &update).await.unwrap();

        assert_eq!(updated.status, ApplicationStatus::Shortlisted);
        assert_eq!(updated.admin_notes.as_deref(), Some("Move to final round"));
        assert_eq!(bus.emitted_types(), vec!["ApplicationStatusUpdated"]);
    }

    #[tokio::test]
    async fn test_status_update_of_unknown_id_emits_nothing() {
        let mut repo = mock_repo();
        repo.expect_update_status().returning(|_, _| Ok(None));
        let (service, bus) = service(repo);

        let update = UpdateApplicationStatusRequest {
            status: ApplicationStatus::Rejected,
            admin_notes: None,
        };
        let err = service.update_application_status("42", &update).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(bus.get_event_log().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let mut repo = mock_repo();
        repo.expect_delete().returning(|id| Ok(id == "1"));
        let (service, bus) = service(repo);

        service.delete_application("1").await.unwrap();
        assert!(service.delete_application("7").await.unwrap_err().is_not_found());
        assert_eq!(bus.emitted_types(), vec!["ApplicationDeleted"]);
    }
}
