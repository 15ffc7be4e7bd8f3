//! Debtor notices and debt summaries.
//!
//! [`render_debtor_message`] and [`aggregate_debtors`] are pure functions over apartments with
//! unpaid bills. [`AssistantService`] loads those apartments and applies them.

mod debtor;
mod message;

#[cfg(test)]
mod tests;

pub use debtor::aggregate_debtors;
pub use message::render_debtor_message;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        apartment::ApartmentWithDebtDto,
        debtor::{DebtorInfoDto, DebtorMessageDto},
    },
    server::{
        error::{data::DataError, Error},
        service::apartment::ApartmentService,
    },
};

pub struct AssistantService<'a> {
    db: &'a DatabaseConnection,
    template: &'a str,
}

impl<'a> AssistantService<'a> {
    /// Creates a new instance of [`AssistantService`]
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `template` - Notice letter with five `{}` placeholders
    pub fn new(db: &'a DatabaseConnection, template: &'a str) -> Self {
        Self { db, template }
    }

    /// Notice for the owner of one apartment
    ///
    /// Fails with [`DataError::ObjectNotFound`] when the apartment has no unpaid bills or no
    /// owner.
    pub async fn message_for_debtor(
        &self,
        apartment_number: i32,
        building_id: i32,
    ) -> Result<DebtorMessageDto, Error> {
        let apartment = ApartmentService::new(self.db)
            .get_apartments_full_data_with_debt_by_apart_id(apartment_number, building_id)
            .await?
            .filter(has_owner)
            .ok_or(DataError::ObjectNotFound)?;

        Ok(render_debtor_message(self.template, &apartment))
    }

    /// One notice per owned apartment with debt, optionally restricted to a project
    pub async fn messages_for_debtors(
        &self,
        project_name: Option<&str>,
    ) -> Result<Vec<DebtorMessageDto>, Error> {
        let apartments = ApartmentService::new(self.db)
            .get_apartments_full_data_with_debt_by_project_name(project_name)
            .await?;

        let messages: Vec<DebtorMessageDto> = apartments
            .iter()
            .filter(|apartment| has_owner(apartment))
            .map(|apartment| render_debtor_message(self.template, apartment))
            .collect();

        tracing::debug!(
            project_name = ?project_name,
            count = messages.len(),
            "Rendered debtor messages"
        );

        Ok(messages)
    }

    /// Debtors grouped by owner, largest total debt first
    pub async fn debtors_with_debt_analyse(
        &self,
        project_name: Option<&str>,
    ) -> Result<Vec<DebtorInfoDto>, Error> {
        let apartments = ApartmentService::new(self.db)
            .get_apartments_full_data_with_debt_by_project_name(project_name)
            .await?;

        let debtors = aggregate_debtors(apartments, true);

        tracing::debug!(
            project_name = ?project_name,
            count = debtors.len(),
            "Aggregated debtors"
        );

        Ok(debtors)
    }
}

fn has_owner(apartment: &ApartmentWithDebtDto) -> bool {
    apartment.owner.is_some()
}
