use crate::utils::CONSTANTS;
use std::borrow::Cow;

pub fn sanitize_sensitive_info(text: &str) -> Cow<'_, str> {
    let masked = CONSTANTS.re_credentials.replace_all(text, "${1}***@");
    if CONSTANTS.re_sensitive_query.is_match(&masked) {
        Cow::Owned(CONSTANTS.re_sensitive_query.replace_all(&masked, "${1}***").into_owned())
    } else {
        masked
    }
}

pub fn get_trimmed_string(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(ToString::to_string)
}
