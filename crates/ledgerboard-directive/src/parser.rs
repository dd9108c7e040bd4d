//! Directive extraction
//!
//! Assistant responses are unstructured prose that may embed rendering
//! instructions of the form:
//!
//! ```text
//! grafico_torta:Categoria|Monto|Ingresos por categoria
//! grafico_barras@Finanzas:Categoria|Monto|Gasto mensual
//! tabla:Tipo Cliente|Monto Neto
//! ```
//!
//! The scanner walks the whole text for every non-overlapping occurrence
//! of the pattern (directives can sit mid-paragraph, in markdown bullets,
//! or inside backtick spans), producing typed [`Directive`] values. A
//! recognized keyword whose body has the wrong field count is reported as
//! a [`MalformedDirective`] and skipped; scanning always continues.

use std::fmt;

/// Kind of rendering directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DirectiveKind {
    /// Pie chart (`grafico_torta`)
    Pie,
    /// Horizontal bar chart (`grafico_barras`)
    Bar,
    /// Summary table (`tabla`)
    Table,
}

impl DirectiveKind {
    /// The wire keyword for this kind
    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Pie => "grafico_torta",
            DirectiveKind::Bar => "grafico_barras",
            DirectiveKind::Table => "tabla",
        }
    }

    /// Human-readable arity requirement, for warnings
    pub fn expected_fields(&self) -> &'static str {
        match self {
            DirectiveKind::Pie | DirectiveKind::Bar => "3",
            DirectiveKind::Table => "2 or 3",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A pie or bar chart request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartDirective {
    /// Optional sheet scope (`@SheetName`)
    pub sheet: Option<String>,
    /// Requested category column, raw as received
    pub category: String,
    /// Requested value column, raw as received
    pub value: String,
    /// Chart title
    pub title: String,
}

/// A summary-table request
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableDirective {
    /// Optional sheet scope (`@SheetName`)
    pub sheet: Option<String>,
    /// Requested category column, raw as received
    pub category: String,
    /// Requested value column, raw as received
    pub value: String,
    /// Optional table title; a label is generated at render time when absent
    pub title: Option<String>,
}

/// A structured rendering request extracted from assistant text
///
/// `category` and `value` hold raw, unnormalized text; the resolver is the
/// sole authority translating them into real column identities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Directive {
    /// Pie chart
    Pie(ChartDirective),
    /// Horizontal bar chart
    Bar(ChartDirective),
    /// Summary table
    Table(TableDirective),
}

impl Directive {
    /// The directive kind
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Pie(_) => DirectiveKind::Pie,
            Directive::Bar(_) => DirectiveKind::Bar,
            Directive::Table(_) => DirectiveKind::Table,
        }
    }

    /// Optional sheet scope
    pub fn sheet(&self) -> Option<&str> {
        match self {
            Directive::Pie(c) | Directive::Bar(c) => c.sheet.as_deref(),
            Directive::Table(t) => t.sheet.as_deref(),
        }
    }

    /// Requested category column
    pub fn category(&self) -> &str {
        match self {
            Directive::Pie(c) | Directive::Bar(c) => &c.category,
            Directive::Table(t) => &t.category,
        }
    }

    /// Requested value column
    pub fn value(&self) -> &str {
        match self {
            Directive::Pie(c) | Directive::Bar(c) => &c.value,
            Directive::Table(t) => &t.value,
        }
    }
}

/// A recognized directive whose body failed arity validation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MalformedDirective {
    /// Directive kind whose keyword matched
    pub kind: DirectiveKind,
    /// Sheet scope, if one parsed
    pub sheet: Option<String>,
    /// Number of fields found
    pub fields: usize,
    /// Raw directive body, for diagnostics
    pub body: String,
}

impl fmt::Display for MalformedDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directive has {} field(s), expected {}: '{}'",
            self.kind,
            self.fields,
            self.kind.expected_fields(),
            self.body
        )
    }
}

/// Result of scanning one text for directives
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Well-formed directives, in order of appearance
    pub directives: Vec<Directive>,
    /// Recognized but arity-invalid directives, in order of appearance
    pub malformed: Vec<MalformedDirective>,
}

impl Extraction {
    /// Check whether the text contained no recognizable directive at all
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.malformed.is_empty()
    }
}

/// Scan free-form text for every directive occurrence
///
/// Deterministic: the same input always yields the same ordered
/// extraction. Text with no directive substrings yields an empty one.
pub fn extract_directives(text: &str) -> Extraction {
    let mut extraction = Extraction::default();
    let mut cursor = Cursor::new(text);

    while !cursor.is_at_end() {
        let Some(kind) = cursor.match_keyword() else {
            cursor.bump();
            continue;
        };

        match cursor.parse_directive(kind) {
            Parsed::Directive(d) => extraction.directives.push(d),
            Parsed::Malformed(m) => extraction.malformed.push(m),
            // Keyword appeared in plain prose; keep scanning after it.
            Parsed::NotADirective => {}
        }
    }

    extraction
}

enum Parsed {
    Directive(Directive),
    Malformed(MalformedDirective),
    NotADirective,
}

/// Character cursor over the scanned text
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Match one of the directive keywords at the current position,
    /// ASCII-case-insensitively, advancing past it on success
    fn match_keyword(&mut self) -> Option<DirectiveKind> {
        // grafico_barras before grafico_torta is irrelevant; the shared
        // prefix never completes as the other keyword.
        const KINDS: [DirectiveKind; 3] = [
            DirectiveKind::Pie,
            DirectiveKind::Bar,
            DirectiveKind::Table,
        ];

        for kind in KINDS {
            let kw = kind.keyword();
            if self
                .rest()
                .get(..kw.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(kw))
            {
                self.pos += kw.len();
                return Some(kind);
            }
        }
        None
    }

    /// Parse the remainder of a directive after its keyword
    ///
    /// On a grammar miss the cursor is restored to just past the keyword
    /// so the outer scan continues from there.
    fn parse_directive(&mut self, kind: DirectiveKind) -> Parsed {
        let start = self.pos;

        let sheet = match self.peek() {
            Some('@') => {
                self.bump();
                match self.parse_sheet_name() {
                    Some(name) => Some(name),
                    None => {
                        self.pos = start;
                        return Parsed::NotADirective;
                    }
                }
            }
            _ => None,
        };

        if self.peek() != Some(':') {
            self.pos = start;
            return Parsed::NotADirective;
        }
        self.bump();

        let body = self.take_line();
        let fields: Vec<String> = body.split('|').map(clean_field).collect();

        let directive = match (kind, fields.as_slice()) {
            (DirectiveKind::Pie, [category, value, title]) => {
                Directive::Pie(ChartDirective {
                    sheet,
                    category: category.clone(),
                    value: value.clone(),
                    title: title.clone(),
                })
            }
            (DirectiveKind::Bar, [category, value, title]) => {
                Directive::Bar(ChartDirective {
                    sheet,
                    category: category.clone(),
                    value: value.clone(),
                    title: title.clone(),
                })
            }
            (DirectiveKind::Table, [category, value]) => Directive::Table(TableDirective {
                sheet,
                category: category.clone(),
                value: value.clone(),
                title: None,
            }),
            (DirectiveKind::Table, [category, value, title]) => {
                Directive::Table(TableDirective {
                    sheet,
                    category: category.clone(),
                    value: value.clone(),
                    title: if title.is_empty() {
                        None
                    } else {
                        Some(title.clone())
                    },
                })
            }
            _ => {
                return Parsed::Malformed(MalformedDirective {
                    kind,
                    sheet,
                    fields: fields.len(),
                    body: body.trim().to_string(),
                });
            }
        };

        Parsed::Directive(directive)
    }

    /// Parse a sheet scope: non-empty, no whitespace, no colon
    fn parse_sheet_name(&mut self) -> Option<String> {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if c == ':' {
                break;
            }
            if c.is_whitespace() || c == '|' || c == '@' {
                return None;
            }
            name.push(c);
            self.bump();
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Take the rest of the current line without consuming the terminator
    fn take_line(&mut self) -> &'a str {
        let rest = self.rest();
        let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }
}

/// Trim a field of whitespace, backticks, and bullet/markdown decoration
fn clean_field(field: &str) -> String {
    field
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '`' | '-' | '*' | '•'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Extraction {
        extract_directives(text)
    }

    #[test]
    fn test_pie_in_prose() {
        let out = extract(
            "Los ingresos se concentran en pocas categorias.\n\
             grafico_torta:Categoria|Monto|Ingresos\n\
             Recomiendo revisar los margenes.",
        );

        assert_eq!(out.malformed, vec![]);
        assert_eq!(
            out.directives,
            vec![Directive::Pie(ChartDirective {
                sheet: None,
                category: "Categoria".into(),
                value: "Monto".into(),
                title: "Ingresos".into(),
            })]
        );
    }

    #[test]
    fn test_scoped_table_two_fields() {
        let out = extract("tabla@FACTURACION:Tipo Cliente|Monto Neto");

        assert_eq!(
            out.directives,
            vec![Directive::Table(TableDirective {
                sheet: Some("FACTURACION".into()),
                category: "Tipo Cliente".into(),
                value: "Monto Neto".into(),
                title: None,
            })]
        );
    }

    #[test]
    fn test_table_three_fields() {
        let out = extract("tabla:Tipo Cliente|Monto Neto|Resumen de clientes");
        match &out.directives[0] {
            Directive::Table(t) => {
                assert_eq!(t.title.as_deref(), Some("Resumen de clientes"))
            }
            other => panic!("expected table, got {:?}", other),
        }
    }

    #[test]
    fn test_bullet_and_backtick_decoration() {
        let out = extract(
            "Sugerencias:\n\
             - `grafico_barras:Categoria|Monto|Gasto por categoria`\n\
             * tabla:Tipo Cliente|Monto\n",
        );

        assert_eq!(out.directives.len(), 2);
        assert_eq!(
            out.directives[0],
            Directive::Bar(ChartDirective {
                sheet: None,
                category: "Categoria".into(),
                value: "Monto".into(),
                title: "Gasto por categoria".into(),
            })
        );
        assert_eq!(out.directives[1].kind(), DirectiveKind::Table);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let out = extract("GRAFICO_TORTA:A|B|C");
        assert_eq!(out.directives[0].kind(), DirectiveKind::Pie);
    }

    #[test]
    fn test_fields_trimmed_inside() {
        let out = extract("grafico_torta: Categoria | Monto | Ingresos del mes ");
        assert_eq!(out.directives[0].category(), "Categoria");
        assert_eq!(out.directives[0].value(), "Monto");
    }

    #[test]
    fn test_wrong_arity_is_malformed_and_scan_continues() {
        let out = extract(
            "grafico_torta:Categoria|Monto|Titulo|Extra\n\
             tabla:Tipo Cliente|Monto",
        );

        assert_eq!(out.directives.len(), 1);
        assert_eq!(out.directives[0].kind(), DirectiveKind::Table);
        assert_eq!(out.malformed.len(), 1);
        assert_eq!(out.malformed[0].kind, DirectiveKind::Pie);
        assert_eq!(out.malformed[0].fields, 4);
    }

    #[test]
    fn test_table_single_field_malformed() {
        let out = extract("tabla:solo_una");
        assert_eq!(out.directives, vec![]);
        assert_eq!(out.malformed.len(), 1);
        assert_eq!(out.malformed[0].fields, 1);
    }

    #[test]
    fn test_keyword_without_colon_is_prose() {
        let out = extract("La tabla de arriba muestra los montos del grafico_torta anterior.");
        assert!(out.is_empty());
    }

    #[test]
    fn test_no_directives() {
        let out = extract("Sin visualizaciones esta vez.");
        assert!(out.is_empty());
        // Deterministic: same input, same result
        assert_eq!(extract("Sin visualizaciones esta vez."), out);
    }

    #[test]
    fn test_multiple_directives_keep_order() {
        let out = extract(
            "grafico_torta:A|B|C\n\
             texto intermedio\n\
             grafico_barras:D|E|F\n\
             tabla:G|H",
        );

        let kinds: Vec<_> = out.directives.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            vec![DirectiveKind::Pie, DirectiveKind::Bar, DirectiveKind::Table]
        );
    }

    #[test]
    fn test_sheet_scope_rejects_whitespace() {
        // A space inside the scope breaks the grammar; the text is prose
        let out = extract("tabla@Mi Hoja:A|B");
        assert!(out.directives.is_empty());
    }

    #[test]
    fn test_directive_mid_line() {
        let out = extract("Como pediste: grafico_torta:Categoria|Monto|Ingresos y nada mas");
        assert_eq!(out.directives.len(), 1);
        // The title absorbs the trailing prose on the same line
        match &out.directives[0] {
            Directive::Pie(c) => assert_eq!(c.title, "Ingresos y nada mas"),
            other => panic!("expected pie, got {:?}", other),
        }
    }
}
