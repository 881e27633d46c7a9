use crate::calendar::DAYS_IN_WEEK;
use pure_rust_locales::{Locale, locale_match};
use std::iter::successors;
use time::{Date, Month, Weekday, macros::date};

/// A week known to start on a Monday, used to enumerate weekday names in
/// calendar order
const REFERENCE_MONDAY: Date = date!(2024 - 01 - 01);

/// Resolve a POSIX (`fr_FR.UTF-8`) or BCP-47 (`fr-FR`, `zh-Hans-CN`) locale
/// identifier to a known locale.  A bare language such as `sv` is tried with
/// its usual region (`sv_SE`).  Anything unrecognized resolves to the POSIX
/// locale.
pub(crate) fn resolve_locale(locale: &str) -> Locale {
    let tag = locale.split(['.', '@']).next().unwrap_or_default();
    if let Ok(loc) = Locale::try_from(tag) {
        return loc;
    }
    let mut subtags = tag.split(['_', '-']).filter(|s| !s.is_empty());
    let Some(language) = subtags.next().map(str::to_ascii_lowercase) else {
        return Locale::POSIX;
    };
    // Script subtags are four letters long
    let region = subtags
        .find(|s| s.len() != 4)
        .map(str::to_ascii_uppercase);
    let mut candidates = Vec::with_capacity(3);
    if let Some(region) = region {
        candidates.push(format!("{language}_{region}"));
    }
    if let Some(region) = default_region(&language) {
        candidates.push(format!("{language}_{region}"));
    }
    candidates.push(format!("{language}_{}", language.to_ascii_uppercase()));
    candidates
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
        .unwrap_or(Locale::POSIX)
}

// Languages whose most common region code differs from the language code
fn default_region(language: &str) -> Option<&'static str> {
    let region = match language {
        "ar" => "EG",
        "be" => "BY",
        "bn" => "BD",
        "ca" => "ES",
        "cs" => "CZ",
        "cy" => "GB",
        "da" => "DK",
        "el" => "GR",
        "en" => "US",
        "et" => "EE",
        "eu" => "ES",
        "fa" => "IR",
        "ga" => "IE",
        "gl" => "ES",
        "he" => "IL",
        "hi" => "IN",
        "hy" => "AM",
        "ja" => "JP",
        "ka" => "GE",
        "kk" => "KZ",
        "ko" => "KR",
        "ms" => "MY",
        "nb" | "nn" => "NO",
        "sl" => "SI",
        "sq" => "AL",
        "sr" => "RS",
        "sv" => "SE",
        "ta" => "IN",
        "uk" => "UA",
        "ur" => "PK",
        "vi" => "VN",
        "zh" => "CN",
        _ => return None,
    };
    Some(region)
}

/// Returns the narrow weekday labels for `locale`, Monday first
pub(crate) fn weekday_initials(locale: &str) -> [String; DAYS_IN_WEEK] {
    let abbrevs = locale_match!(resolve_locale(locale) => LC_TIME::ABDAY);
    let mut week = successors(Some(REFERENCE_MONDAY), |d| d.next_day());
    std::array::from_fn(|_| {
        let day = week
            .next()
            .expect("reference week should not reach the end of time");
        narrow(weekday_name(abbrevs, day.weekday()))
    })
}

/// Returns the full name of `month` in `locale`
pub(crate) fn month_name(locale: &str, month: Month) -> &'static str {
    let names: &'static [&'static str] = locale_match!(resolve_locale(locale) => LC_TIME::MON);
    names
        .get(usize::from(u8::from(month)) - 1)
        .copied()
        .unwrap_or_default()
}

// Locale weekday tables run from Sunday to Saturday.
fn weekday_name(names: &'static [&'static str], wd: Weekday) -> &'static str {
    names
        .get(usize::from(wd.number_days_from_sunday()))
        .copied()
        .unwrap_or_default()
}

fn narrow(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Returns the locale named by the environment, following the usual
/// precedence of `LC_ALL`, `LC_TIME`, then `LANG`
pub(crate) fn env_locale() -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| String::from("C"))
}
