//! Template Filler — single-pass `{FIELD}` substitution.
//!
//! `{{` and `}}` produce literal braces. Substituted values are copied
//! verbatim and never scanned again, so a value containing `{NAME}` stays as is.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("template references field '{0}' which was not supplied")]
    MissingField(String),

    #[error("malformed template at byte {position}: {reason}")]
    Malformed {
        position: usize,
        reason: &'static str,
    },
}

/// Replaces every `{NAME}` in `template` with `fields["NAME"]`.
pub fn fill_template(
    template: &str,
    fields: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => {
                            return Err(TemplateError::Malformed {
                                position,
                                reason: "unclosed placeholder",
                            })
                        }
                        Some((_, ch)) => name.push(ch),
                    }
                }
                if name.is_empty() {
                    return Err(TemplateError::Malformed {
                        position,
                        reason: "empty placeholder",
                    });
                }
                let value = fields
                    .get(&name)
                    .ok_or_else(|| TemplateError::MissingField(name.clone()))?;
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(TemplateError::Malformed {
                        position,
                        reason: "unmatched '}'",
                    });
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
