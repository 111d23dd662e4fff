/// A first-level administrative subdivision (state, province, territory)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subdivision {
    /// Region code without the ISO country prefix, e.g. "NY" for US-NY
    pub code: &'static str,
    pub name: &'static str,
}

/// A country together with every region code that is valid inside it
#[derive(Debug, Clone, Copy)]
pub struct Country {
    /// Official English name, the form stored on records by most clients
    pub name: &'static str,
    /// ISO 3166-1 alpha-2
    pub alpha2: &'static str,
    /// ISO 3166-1 alpha-3
    pub alpha3: &'static str,
    /// Other spellings accepted when resolving a country
    pub aliases: &'static [&'static str],
    pub subdivisions: &'static [Subdivision],
}

impl Country {
    /// Look up a subdivision by its canonical (upper-case) code
    pub fn subdivision(&self, code: &str) -> Option<&'static Subdivision> {
        self.subdivisions.iter().find(|s| s.code == code)
    }
}
