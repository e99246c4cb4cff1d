//! Fake text vocabulary.
//!
//! Every function draws from the context's RNG, so a seeded context
//! always yields the same names, sentences and links. Person names,
//! cities, phone numbers and email domains follow the context's locale.

mod locale;
mod words;

use crate::context::GenerationContext;
use crate::generators::pattern::generate_pattern;
use sha2::{Digest, Sha256};

fn pick(ctx: &mut GenerationContext, pool: &[&'static str]) -> &'static str {
    // Every pool in this module is a non-empty constant.
    ctx.pick(pool).unwrap_or_default()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn slug(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Given name.
pub fn first_name(ctx: &mut GenerationContext) -> &'static str {
    let data = locale::data(ctx.locale());
    pick(ctx, data.first_names)
}

/// Family name.
pub fn last_name(ctx: &mut GenerationContext) -> &'static str {
    let data = locale::data(ctx.locale());
    pick(ctx, data.last_names)
}

/// Full person name.
pub fn name(ctx: &mut GenerationContext) -> String {
    let first = first_name(ctx);
    let last = last_name(ctx);
    format!("{first} {last}")
}

/// Login handle such as `kavya.iyer42`.
pub fn user_name(ctx: &mut GenerationContext) -> String {
    let first = slug(first_name(ctx));
    let last = slug(last_name(ctx));
    match ctx.int_range(0, 2) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}{}", ctx.int_range(1, 99)),
        _ => format!("{last}.{first}{}", ctx.int_range(1, 99)),
    }
}

/// Email address on a locale-typical free mail domain.
pub fn email(ctx: &mut GenerationContext) -> String {
    let local = user_name(ctx);
    let data = locale::data(ctx.locale());
    let domain = pick(ctx, data.email_domains);
    format!("{local}@{domain}")
}

/// Hex SHA-256 digest of random bytes, shaped like a stored password hash.
pub fn password_hash(ctx: &mut GenerationContext) -> String {
    let mut secret = [0u8; 32];
    rand::Rng::fill(ctx.rng(), &mut secret);
    let digest = Sha256::digest(secret);
    format!("{digest:x}")
}

/// Company name such as `Mehta Technologies`.
pub fn company(ctx: &mut GenerationContext) -> String {
    let data = locale::data(ctx.locale());
    let founder = pick(ctx, data.last_names);
    if ctx.chance(0.3) {
        let partner = pick(ctx, data.last_names);
        format!("{founder} & {partner}")
    } else {
        let suffix = pick(ctx, data.company_suffixes);
        format!("{founder} {suffix}")
    }
}

/// Job title.
pub fn job(ctx: &mut GenerationContext) -> &'static str {
    pick(ctx, words::JOBS)
}

/// City name.
pub fn city(ctx: &mut GenerationContext) -> &'static str {
    let data = locale::data(ctx.locale());
    pick(ctx, data.cities)
}

/// Phone number in a locale-typical format.
pub fn phone_number(ctx: &mut GenerationContext) -> String {
    let data = locale::data(ctx.locale());
    let pattern = pick(ctx, data.phone_patterns);
    generate_pattern(pattern, ctx.rng(), 0)
}

/// Website URL.
pub fn url(ctx: &mut GenerationContext) -> String {
    let data = locale::data(ctx.locale());
    let host = match ctx.int_range(0, 1) {
        0 => slug(last_name(ctx)),
        _ => {
            let head = pick(ctx, words::DOMAIN_WORDS);
            let tail = pick(ctx, words::DOMAIN_WORDS);
            format!("{head}{tail}")
        }
    };
    let tld = pick(ctx, data.url_tlds);
    format!("https://www.{host}.{tld}/")
}

/// Placeholder image URL.
pub fn image_url(ctx: &mut GenerationContext) -> String {
    let width = ctx.int_range(2, 10) * 64;
    let height = ctx.int_range(2, 10) * 64;
    format!("https://picsum.photos/{width}/{height}")
}

/// Marketing catch phrase such as `Progressive didactic model`.
pub fn catch_phrase(ctx: &mut GenerationContext) -> String {
    let adjective = pick(ctx, words::CATCH_PHRASE_ADJECTIVES);
    let descriptor = pick(ctx, words::CATCH_PHRASE_DESCRIPTORS);
    let noun = pick(ctx, words::CATCH_PHRASE_NOUNS);
    format!("{adjective} {descriptor} {noun}")
}

/// Single lorem word.
pub fn word(ctx: &mut GenerationContext) -> &'static str {
    pick(ctx, words::LOREM)
}

/// `count` lorem words (duplicates allowed).
pub fn words(ctx: &mut GenerationContext, count: usize) -> Vec<String> {
    (0..count).map(|_| word(ctx).to_string()).collect()
}

/// Sentence of roughly `word_count` words (±40%), capitalized and ending in a period.
pub fn sentence(ctx: &mut GenerationContext, word_count: usize) -> String {
    let spread = (word_count as i64 * 2) / 5;
    let count = ctx
        .int_range(word_count as i64 - spread, word_count as i64 + spread)
        .max(1) as usize;
    let body = words(ctx, count).join(" ");
    format!("{}.", capitalize(&body))
}

/// Paragraph of roughly `sentence_count` sentences.
pub fn paragraph(ctx: &mut GenerationContext, sentence_count: usize) -> String {
    let spread = (sentence_count as i64 * 2) / 5;
    let count = ctx
        .int_range(sentence_count as i64 - spread, sentence_count as i64 + spread)
        .max(1) as usize;
    (0..count)
        .map(|_| sentence(ctx, 8))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text of at most `max_chars` characters made of whole sentences.
pub fn text(ctx: &mut GenerationContext, max_chars: usize) -> String {
    let mut result = String::new();
    loop {
        let next = sentence(ctx, 6);
        let separator = usize::from(!result.is_empty());
        if result.len() + separator + next.len() > max_chars {
            break;
        }
        if separator == 1 {
            result.push(' ');
        }
        result.push_str(&next);
    }

    if result.is_empty() {
        // Not even one sentence fits: cut a sentence down to size.
        let mut short = sentence(ctx, 3);
        short.truncate(max_chars.saturating_sub(1));
        let trimmed = short.trim_end_matches(|c: char| c == '.' || c == ' ');
        result = format!("{trimmed}.");
        if max_chars == 0 {
            result.clear();
        }
    }
    result
}
