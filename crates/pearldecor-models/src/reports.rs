//! The per-client report: profile plus everything recorded against the client.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::clients::{ClientDetails, ClientProfile};
use crate::contracts::{Contract, ContractSummary};
use crate::feedback::{Feedback, FeedbackSummary};
use crate::meetings::{Meeting, MeetingSummary};
use crate::notes::{Note, NoteEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClientReport {
    pub client: ClientProfile,
    pub contracts: Vec<ContractSummary>,
    pub feedbacks: Vec<FeedbackSummary>,
    pub meetings: Vec<MeetingSummary>,
    pub notes: Vec<NoteEntry>,
}

impl ClientReport {
    /// Builds the report from already-fetched rows, keeping their order.
    pub fn assemble(
        client: &ClientDetails,
        contracts: Vec<Contract>,
        feedbacks: Vec<Feedback>,
        meetings: Vec<Meeting>,
        notes: Vec<Note>,
    ) -> Self {
        Self {
            client: ClientProfile::from(client),
            contracts: contracts.into_iter().map(Into::into).collect(),
            feedbacks: feedbacks.into_iter().map(Into::into).collect(),
            meetings: meetings.into_iter().map(Into::into).collect(),
            notes: notes.into_iter().map(Into::into).collect(),
        }
    }
}
