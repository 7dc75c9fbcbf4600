//! Message composition: filename, greeting, caption, and email body.

/// Subject line for the email channel.
pub const EMAIL_SUBJECT: &str = "Seu arquivo solicitado";

/// Attachment filename for a package label, always `"{label}.pdf"`.
#[must_use]
pub fn attachment_filename(package_label: &str) -> String {
    format!("{package_label}.pdf")
}

/// Greeting name: the first whitespace-delimited token of the full name.
#[must_use]
pub fn greeting_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("")
}

/// Caption sent alongside the document on the messaging channel.
#[must_use]
pub fn caption(full_name: &str) -> String {
    let first = greeting_name(full_name);
    format!("Oi {first}, aqui está o PDF do seu investimento. Qualquer dúvida, me avise!")
}

/// HTML body for the email channel.
#[must_use]
pub fn email_body_html(full_name: &str, package_label: &str) -> String {
    let first = greeting_name(full_name);
    format!(
        "<p>Olá {first},</p><p>Segue em anexo o PDF do pacote <strong>{package_label}</strong>.</p>"
    )
}
