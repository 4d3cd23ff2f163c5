//! HTML special-character escaping

use serde::{Deserialize, Serialize};

use super::pattern::ENTITY;

/// Which quote characters `escape_html` encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuoteMode {
    /// Encode both `"` and `'`
    #[default]
    Both,
    /// Encode `"` only
    DoubleOnly,
    /// Leave quotes alone
    Neither,
}

/// HTML 4.01 named character references
const NAMED_ENTITIES: &[&str] = &[
    // markup and Latin-extended
    "quot", "amp", "lt", "gt", "OElig", "oelig", "Scaron", "scaron", "Yuml", "circ", "tilde",
    "ensp", "emsp", "thinsp", "zwnj", "zwj", "lrm", "rlm", "ndash", "mdash", "lsquo", "rsquo",
    "sbquo", "ldquo", "rdquo", "bdquo", "dagger", "Dagger", "permil", "lsaquo", "rsaquo", "euro",
    // Latin-1
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute",
    "ucirc", "uuml", "yacute", "thorn", "yuml",
    // symbols and Greek
    "fnof", "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega", "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", "iota",
    "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigmaf", "sigma", "tau",
    "upsilon", "phi", "chi", "psi", "omega", "thetasym", "upsih", "piv", "bull", "hellip",
    "prime", "Prime", "oline", "frasl", "weierp", "image", "real", "trade", "alefsym", "larr",
    "uarr", "rarr", "darr", "harr", "crarr", "lArr", "uArr", "rArr", "dArr", "hArr", "forall",
    "part", "exist", "empty", "nabla", "isin", "notin", "ni", "prod", "sum", "minus", "lowast",
    "radic", "prop", "infin", "ang", "and", "or", "cap", "cup", "int", "there4", "sim", "cong",
    "asymp", "ne", "equiv", "le", "ge", "sub", "sup", "nsub", "sube", "supe", "oplus", "otimes",
    "perp", "sdot", "lceil", "rceil", "lfloor", "rfloor", "lang", "rang", "loz", "spades",
    "clubs", "hearts", "diams",
];

/// True when `rest` starts with a known named entity or a character
/// reference to a Unicode scalar value
fn starts_with_entity(rest: &str) -> bool {
    let Some(caps) = ENTITY.captures(rest) else {
        return false;
    };
    if let Some(name) = caps.get(1) {
        return NAMED_ENTITIES.contains(&name.as_str());
    }
    let code = match (caps.get(2), caps.get(3)) {
        (Some(dec), _) => u32::from_str_radix(dec.as_str(), 10),
        (_, Some(hex)) => u32::from_str_radix(hex.as_str(), 16),
        _ => return false,
    };
    code.ok().and_then(char::from_u32).is_some()
}

/// Encode `&`, `<`, `>` and the quotes selected by `mode`
///
/// Entities already present in the input (`&amp;`, `&#39;`, `&#x27;`) are
/// left as they are. Unknown names and references outside Unicode get their
/// ampersand encoded.
pub fn escape_html(text: &str, mode: QuoteMode) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, ch) in text.char_indices() {
        match ch {
            '&' if starts_with_entity(&text[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if mode != QuoteMode::Neither => out.push_str("&quot;"),
            '\'' if mode == QuoteMode::Both => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }

    out
}
