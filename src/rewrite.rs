//! Body rewriting: wiki links to Hexo links, header removal

use once_cell::sync::Lazy;
use regex::Regex;

use crate::frontmatter::split_frontmatter;

/// `![[file]]` embeds
static EMBED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").unwrap());

/// `[[name]]` wiki links
static WIKILINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Rewrite wiki syntax into Hexo markdown.
///
/// `![[img.png]]` becomes `![](/images/img.png)` and `[[Name]]` becomes
/// `[Name](/tags/Name/)`. Embeds are rewritten first so they are not taken
/// for plain links.
pub fn rewrite_links(body: &str) -> String {
    let body = EMBED_RE.replace_all(body, "![](/images/${1})");
    WIKILINK_RE
        .replace_all(&body, "[${1}](/tags/${1}/)")
        .into_owned()
}

/// Drop a header block left at the top of the body
pub fn strip_frontmatter(body: &str) -> &str {
    let trimmed = body.trim_start();
    match split_frontmatter(trimmed) {
        (Some(_), rest) => rest.trim(),
        (None, _) => trimmed.trim_end(),
    }
}
