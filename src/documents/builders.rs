//! View model builders, one per document kind.

use super::common::{format_display_date, normalize_base_location};
use super::funds::{flatten_funds, net_total};
use super::kind::DocumentKind;
use super::render::ViewRenderer;
use super::review::compose_review_message;
use super::templates::TemplateRegistry;
use super::view_model::{
    ActivatedViewModel, CommonFields, DocumentViewModel, InReviewViewModel, PendingViewModel,
    PortfolioFields,
};
use super::DocumentError;
use crate::application::Application;
use crate::config::DocumentSettings;

/// Turns an application into the view model for one document kind.
pub trait DocumentBuilder: Send + Sync {
    fn kind(&self) -> DocumentKind;

    fn build(
        &self,
        application: &Application,
        settings: &DocumentSettings,
    ) -> Result<DocumentViewModel, DocumentError>;

    /// Build the view model and render it against this kind's template.
    fn render(
        &self,
        application: &Application,
        settings: &DocumentSettings,
        base_location: &str,
        templates: &dyn TemplateRegistry,
        renderer: &dyn ViewRenderer,
    ) -> Result<String, DocumentError> {
        let model = self.build(application, settings)?;
        let template_path = templates.resolve(self.kind().template_name())?;
        let location = format!("{}{}", normalize_base_location(base_location), template_path);

        log::debug!(
            "rendering {} document for application {} from {}",
            self.kind().template_name(),
            application.id,
            location
        );

        renderer.render(&location, &model)
    }
}

pub struct PendingDocumentBuilder;
pub struct ActivatedDocumentBuilder;
pub struct InReviewDocumentBuilder;

/// Builder for a document kind.
pub fn builder_for(kind: DocumentKind) -> &'static dyn DocumentBuilder {
    match kind {
        DocumentKind::Pending => &PendingDocumentBuilder,
        DocumentKind::Activated => &ActivatedDocumentBuilder,
        DocumentKind::InReview => &InReviewDocumentBuilder,
    }
}

fn common_fields(application: &Application, settings: &DocumentSettings) -> CommonFields {
    CommonFields {
        reference: application.reference.clone(),
        state_label: application.state.label(),
        applicant_name: application.applicant.full_name(),
        application_date: application.application_date,
        application_date_label: format_display_date(application.application_date),
        support_email: settings.support_email.clone(),
        signature: settings.signature.clone(),
    }
}

fn portfolio_fields(
    application: &Application,
    settings: &DocumentSettings,
) -> Result<PortfolioFields, DocumentError> {
    let legal_entity = if application.is_legal_entity {
        let details = application
            .legal_entity
            .clone()
            .ok_or(DocumentError::MissingLegalEntity(application.id))?;
        Some(details)
    } else {
        None
    };
    let funds = flatten_funds(&application.products);
    let net_total = net_total(&funds, settings.tax_rate)
        .ok_or(DocumentError::NetTotalOverflow(application.id))?;

    Ok(PortfolioFields {
        legal_entity,
        funds,
        net_total,
    })
}

impl DocumentBuilder for PendingDocumentBuilder {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pending
    }

    fn build(
        &self,
        application: &Application,
        settings: &DocumentSettings,
    ) -> Result<DocumentViewModel, DocumentError> {
        Ok(DocumentViewModel::Pending(PendingViewModel {
            common: common_fields(application, settings),
        }))
    }
}

impl DocumentBuilder for ActivatedDocumentBuilder {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Activated
    }

    fn build(
        &self,
        application: &Application,
        settings: &DocumentSettings,
    ) -> Result<DocumentViewModel, DocumentError> {
        Ok(DocumentViewModel::Activated(ActivatedViewModel {
            common: common_fields(application, settings),
            portfolio: portfolio_fields(application, settings)?,
        }))
    }
}

impl DocumentBuilder for InReviewDocumentBuilder {
    fn kind(&self) -> DocumentKind {
        DocumentKind::InReview
    }

    fn build(
        &self,
        application: &Application,
        settings: &DocumentSettings,
    ) -> Result<DocumentViewModel, DocumentError> {
        let review = application
            .current_review
            .clone()
            .ok_or(DocumentError::MissingReview(application.id))?;

        Ok(DocumentViewModel::InReview(InReviewViewModel {
            common: common_fields(application, settings),
            portfolio: portfolio_fields(application, settings)?,
            review_message: compose_review_message(&review.reason),
            review,
        }))
    }
}
