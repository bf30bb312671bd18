use axum::{extract::State, response::Redirect, Form};
use tracing::info;

use crate::contact::{spawn_email, whatsapp_link, ContactForm};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /contact
/// Redirects to the WhatsApp deep link; the email copy goes out in the background.
pub async fn contact_handler(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect, AppError> {
    let form = form.validated()?;
    let profile = &state.config.profile;
    let link = whatsapp_link(&profile.whatsapp_number, &profile.owner, &form)?;

    if let Some(relay) = &state.email {
        spawn_email(relay.clone(), form.clone());
    }

    info!("Contact message from {} relayed to WhatsApp", form.email);
    Ok(Redirect::to(link.as_str()))
}
