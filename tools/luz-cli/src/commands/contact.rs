//! PQRS contact command.

use anyhow::{anyhow, Result};
use dialoguer::{Input, Select};
use luz_commerce::contact::{ContactForm, PqrsKind};
use luz_observability::SessionId;
use luz_storefront::Route;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let interactive = !args.no_input && ctx.output.is_interactive();
    let form = collect_form(&args, interactive)?;

    let store = ctx.storefront()?;
    let links = store.contact_links(&form);

    ctx.logger(&SessionId::generate(), &Route::Contact)
        .info_builder("contact request composed")
        .field("kind", form.kind.label())
        .field_bool("has_email", !form.email.trim().is_empty())
        .emit();

    if ctx.output.is_json() {
        ctx.output.json(&links);
        return Ok(());
    }

    ctx.output.header(&format!("PQRS: {}", form.kind));
    for line in links.message.lines() {
        ctx.output.line(&format!("  {}", line));
    }
    ctx.output.line("");
    ctx.output.link("WhatsApp", &links.whatsapp);
    ctx.output.link("Email", &links.mailto);
    Ok(())
}

fn collect_form(args: &ContactArgs, interactive: bool) -> Result<ContactForm> {
    let kind = match &args.kind {
        Some(raw) => PqrsKind::parse(raw).ok_or_else(|| {
            anyhow!(
                "Unknown request kind '{}' (petition, complaint, claim or suggestion)",
                raw
            )
        })?,
        None if interactive => {
            let labels: Vec<&str> = PqrsKind::ALL.iter().map(|k| k.label()).collect();
            let selection = Select::new()
                .with_prompt("Request type")
                .items(&labels)
                .default(0)
                .interact()?;
            PqrsKind::ALL[selection]
        }
        None => PqrsKind::default(),
    };

    let name = field(&args.name, "Name", interactive)?;
    let email = field(&args.email, "Email", interactive)?;
    let message = field(&args.message, "Message", interactive)?;

    Ok(ContactForm::new(kind)
        .with_name(name)
        .with_email(email)
        .with_message(message))
}

/// A flag value, or a prompt for it. Blank answers are allowed.
fn field(value: &Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v.clone()),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}
