// potpie-core/src/catalog/po.rs
//! gettext PO/POT catalogs.
//!
//! Messages are read and written with `polib`. The header entry (`msgid ""`)
//! and the comments above it are kept aside exactly as they appear in the
//! file: `polib` requires a fixed set of header fields and only writes those
//! back, so it is handed a complete stand-in header and the original one is
//! restored on save. Files without a header stay without one.
//!
//! Singular messages map `msgid` to `msgstr`. Plural messages fill
//! `msgstr[0]` from `msgid` and every further form from `msgid_plural`. The
//! number of forms is the larger of the forms already present and the
//! header's `nplurals`, and never less than two.

use log::{debug, info};
use polib::catalog::Catalog as PoFile;
use polib::message::{MessageMutView, MessageView};
use polib::po_file;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::{ensure_parent_dir, Catalog, CatalogEntry};
use crate::errors::{PotpieError, Result};

/// Plural messages always get at least this many forms.
const MIN_PLURAL_FORMS: usize = 2;

/// Header given to `polib` in place of the file's own.
const STAND_IN_HEADER: &str = concat!(
    "msgid \"\"\n",
    "msgstr \"\"\n",
    "\"Project-Id-Version: potpie\\n\"\n",
    "\"POT-Creation-Date: 1970-01-01 00:00+0000\\n\"\n",
    "\"PO-Revision-Date: 1970-01-01 00:00+0000\\n\"\n",
    "\"Last-Translator: potpie\\n\"\n",
    "\"Language-Team: potpie\\n\"\n",
    "\"MIME-Version: 1.0\\n\"\n",
    "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
    "\"Content-Transfer-Encoding: 8bit\\n\"\n",
    "\"Language: xx\\n\"\n",
    "\"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"\n",
    "\n",
);

/// Keywords whose value is a quoted string on the same line.
const KEYWORDS: [&str; 4] = ["msgctxt", "msgid", "msgid_plural", "msgstr"];

/// The header entry of a PO file, with the comments above it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoHeader {
    raw: String,
    fields: Vec<(String, String)>,
}

impl PoHeader {
    /// The header exactly as it appeared in the file.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Header fields in file order, unescaped.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of the header field `key`, compared case-insensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// `nplurals` from the `Plural-Forms` field.
    pub fn nplurals(&self) -> Option<usize> {
        self.get("Plural-Forms")?
            .split(';')
            .find_map(|part| part.trim().strip_prefix("nplurals=")?.trim().parse().ok())
    }
}

pub struct PoCatalog {
    header: Option<PoHeader>,
    inner: PoFile,
}

impl std::fmt::Debug for PoCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoCatalog")
            .field("header", &self.header.is_some())
            .field("messages", &self.len())
            .finish()
    }
}

fn entry_error(msgid: &str, reason: impl ToString) -> PotpieError {
    PotpieError::EntryUpdate {
        msgid: msgid.to_string(),
        reason: reason.to_string(),
    }
}

/// Content between the surrounding double quotes of `s`, if it is quoted.
fn quoted(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Some(&s[1..s.len() - 1])
    } else {
        None
    }
}

/// Resolves the C escapes gettext allows inside a quoted string.
fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Splits `text` into its header entry and everything after it.
///
/// The header is the first entry when its `msgid` is the empty string and it
/// has a plain `msgstr`; comment lines above it belong to it.
pub fn split_header(text: &str) -> (Option<PoHeader>, &str) {
    let mut lines = text.split_inclusive('\n').peekable();
    let mut end = 0usize;
    while let Some(line) = lines.peek() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            end += line.len();
            lines.next();
        } else {
            break;
        }
    }

    let Some(msgid) = lines.next() else {
        return (None, text);
    };
    if msgid.trim() != "msgid \"\"" {
        return (None, text);
    }
    let Some(msgstr) = lines.next() else {
        return (None, text);
    };
    let Some(first) = msgstr.trim().strip_prefix("msgstr ").and_then(quoted) else {
        return (None, text);
    };
    end += msgid.len() + msgstr.len();

    let mut escaped = first.to_string();
    for line in lines {
        match quoted(line) {
            Some(part) if line.trim_start().starts_with('"') => {
                escaped.push_str(part);
                end += line.len();
            }
            _ => break,
        }
    }

    let fields = unescape(&escaped)
        .split('\n')
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();
    let header = PoHeader {
        raw: text[..end].to_string(),
        fields,
    };
    (Some(header), &text[end..])
}

/// Rejects lines `polib` cannot cope with: keyword and continuation lines
/// must carry a complete quoted string.
fn check_syntax(body: &str) -> std::result::Result<(), String> {
    for (number, line) in body.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        let value = if line.starts_with('"') {
            Some(line)
        } else if line.starts_with('m') {
            line.split_once(' ').and_then(|(keyword, rest)| {
                let bare = keyword.split('[').next().unwrap_or(keyword);
                KEYWORDS.contains(&bare).then_some(rest)
            })
        } else {
            None
        };
        if let Some(value) = value {
            let complete = value.len() >= 2 && value.starts_with('"') && value.ends_with('"');
            if !complete {
                return Err(format!("line {}: expected a quoted string in {:?}", number + 1, line));
            }
        }
    }
    Ok(())
}

impl PoCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let catalog = Self::parse(&text, &path.display().to_string())?;
        info!("Loaded {} messages from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parses PO text; `origin` names the source in error messages.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let malformed = |reason: String| PotpieError::MalformedCatalog {
            path: origin.to_string(),
            reason,
        };

        let (header, body) = split_header(text);
        check_syntax(body).map_err(malformed)?;
        debug!(
            "{}: {} header, {} bytes of messages",
            origin,
            if header.is_some() { "found" } else { "no" },
            body.len()
        );

        let mut staging = NamedTempFile::new()?;
        staging.write_all(STAND_IN_HEADER.as_bytes())?;
        staging.write_all(body.as_bytes())?;
        staging.flush()?;
        let inner = po_file::parse(staging.path()).map_err(|e| malformed(e.to_string()))?;

        Ok(Self { header, inner })
    }

    pub fn header(&self) -> Option<&PoHeader> {
        self.header.as_ref()
    }

    /// Forms a plural message gets when it has fewer.
    fn plural_forms_floor(&self) -> usize {
        self.header
            .as_ref()
            .and_then(PoHeader::nplurals)
            .unwrap_or(MIN_PLURAL_FORMS)
            .max(MIN_PLURAL_FORMS)
    }

    /// The file contents to write: the original header, then `polib`'s messages.
    fn render(&self) -> Result<String> {
        let staging = NamedTempFile::new()?;
        po_file::write(&self.inner, staging.path())?;
        let written = fs::read_to_string(staging.path())?;
        let messages = written
            .trim_start_matches('\n')
            .split_once("\n\n")
            .map(|(_, rest)| rest)
            .unwrap_or("");

        let mut out = String::with_capacity(written.len());
        if let Some(header) = &self.header {
            out.push_str(header.raw().trim_end());
            out.push_str("\n\n");
        }
        out.push_str(messages);
        Ok(out)
    }
}

impl Catalog for PoCatalog {
    fn len(&self) -> usize {
        self.inner.count()
    }

    fn entries(&self) -> Vec<CatalogEntry> {
        let mut out = Vec::new();
        for message in self.inner.messages() {
            if message.is_plural() {
                let forms = message.msgstr_plural().cloned().unwrap_or_default();
                let plural_source = message.msgid_plural().unwrap_or_default();
                for (i, form) in forms.into_iter().enumerate() {
                    let source = if i == 0 { message.msgid() } else { plural_source };
                    out.push(CatalogEntry::new(source, form));
                }
            } else {
                out.push(CatalogEntry::new(message.msgid(), message.msgstr().unwrap_or_default()));
            }
        }
        out
    }

    fn fill_targets(&mut self, fill: &mut dyn FnMut(&str) -> Result<String>) -> Result<usize> {
        let floor = self.plural_forms_floor();
        let mut written = 0usize;
        for mut message in self.inner.messages_mut() {
            let msgid = message.msgid().to_string();
            if message.is_plural() {
                let plural_source = message
                    .msgid_plural()
                    .map_err(|e| entry_error(&msgid, e))?
                    .to_string();
                let singular = fill(&msgid)?;
                let plural = fill(&plural_source)?;
                let forms = message.msgstr_plural_mut().map_err(|e| entry_error(&msgid, e))?;
                let form_count = forms.len().max(floor);
                debug!("Filling {} plural form(s) for '{}'", form_count, msgid);
                forms.clear();
                forms.push(singular);
                forms.resize(form_count, plural);
            } else {
                let target = fill(&msgid)?;
                message.set_msgstr(target).map_err(|e| entry_error(&msgid, e))?;
            }
            written += 1;
        }
        Ok(written)
    }

    fn save(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        fs::write(path, self.render()?)?;
        debug!("Wrote PO catalog to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = concat!(
        "# French translation.\n",
        "#, fuzzy\n",
        "msgid \"\"\n",
        "msgstr \"\"\n",
        "\"Content-Type: text/plain; charset=UTF-8\\n\"\n",
        "\"X-Generator: Poedit 3.0\\n\"\n",
        "\"Plural-Forms: nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 ? 1 : 2);\\n\"\n",
    );

    #[test]
    fn split_header_keeps_comments_and_fields() {
        let text = format!("{}\nmsgid \"Open\"\nmsgstr \"\"\n", HEADER);
        let (header, body) = split_header(&text);
        let header = header.unwrap();
        assert_eq!(header.raw(), HEADER);
        assert_eq!(header.get("x-generator"), Some("Poedit 3.0"));
        assert_eq!(header.nplurals(), Some(3));
        assert_eq!(body, "\nmsgid \"Open\"\nmsgstr \"\"\n");
    }

    #[test]
    fn first_message_is_not_mistaken_for_a_header() {
        let multi_line_msgid = "msgid \"\"\n\"Hello\"\nmsgstr \"\"\n";
        assert_eq!(split_header(multi_line_msgid).0, None);
        let plain = "#: main.c:1\nmsgid \"Hello\"\nmsgstr \"\"\n";
        let (header, body) = split_header(plain);
        assert_eq!(header, None);
        assert_eq!(body, plain);
    }

    #[test]
    fn unterminated_strings_are_rejected() {
        assert!(check_syntax("msgid \"Hello\"\nmsgstr \"\"\n").is_ok());
        assert!(check_syntax("msgid \"Hello\nmsgstr \"\"\n").is_err());
        assert!(check_syntax("msgid \"\"\n\"\n").is_err());
        assert!(check_syntax("msgstr[0] x\n").is_err());
        // Obsolete entries and comments are left to the parser.
        assert!(check_syntax("#~ msgid \"gone\n").is_ok());
    }

    #[test]
    fn unescape_handles_gettext_escapes() {
        assert_eq!(unescape(r#"a\nb\t\"c\"\\"#), "a\nb\t\"c\"\\");
    }

    #[test]
    fn malformed_body_is_an_error_not_a_panic() {
        let err = PoCatalog::parse("msgid \"unterminated\nmsgstr \"\"\n", "broken.po").unwrap_err();
        assert!(matches!(err, PotpieError::MalformedCatalog { ref path, .. } if path == "broken.po"));
    }

    #[test]
    fn header_nplurals_raises_the_form_count() -> Result<()> {
        let text = format!("{}\nmsgid \"One file\"\nmsgid_plural \"%d files\"\nmsgstr[0] \"\"\n", HEADER);
        let mut catalog = PoCatalog::parse(&text, "fr.po")?;
        catalog.fill_targets(&mut |s: &str| -> Result<String> { Ok(format!("<{}>", s)) })?;
        let targets: Vec<String> = catalog.entries().into_iter().map(|e| e.target).collect();
        assert_eq!(targets, vec!["<One file>", "<%d files>", "<%d files>"]);
        Ok(())
    }
}
