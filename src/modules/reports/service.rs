use sqlx::PgPool;
use tracing::instrument;

use pearldecor_core::AppError;
use pearldecor_models::ClientReport;

use crate::modules::clients::service::ClientService;
use crate::modules::contracts::service::ContractService;
use crate::modules::feedback::service::FeedbackService;
use crate::modules::meetings::service::MeetingService;
use crate::modules::notes::service::NoteService;

pub struct ReportService;

impl ReportService {
    #[instrument(skip(db))]
    pub async fn client_report(db: &PgPool, client_id: i32) -> Result<ClientReport, AppError> {
        let client = ClientService::find_client(db, client_id).await?;

        let contracts = ContractService::contracts_for_client(db, client.id).await?;
        let feedbacks = FeedbackService::feedbacks_for_client(db, client.id).await?;
        let meetings = MeetingService::meetings_for_client(db, client.id).await?;
        let notes = NoteService::notes_for_client(db, client.id).await?;

        Ok(ClientReport::assemble(
            &client, contracts, feedbacks, meetings, notes,
        ))
    }
}
