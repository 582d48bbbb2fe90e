//! Template/override attribute resolution
//!
//! A [`UnitTemplate`] stores its own [`UnitStats`] and optionally points at a
//! parent template. Every attribute resolves to the object's own value when it
//! has one, otherwise to the parent's resolved value, walking the chain as far
//! as it goes. `specials` is the exception: the parent's resolved specials come
//! first, followed by the object's own.
//!
//! A [`Unit`] is a template whose required attributes are guaranteed to resolve.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::DisplayConfig;
use crate::error::MissingFieldError;

use super::specials::Special;
use super::types::{Role, UnitType};

/// The attributes a template or unit stores for itself
///
/// Anything left as `None` is inherited from the parent template, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitStats {
    pub name: Option<String>,
    pub model: Option<String>,
    /// Point value
    pub pv: Option<u32>,
    pub tp: Option<UnitType>,
    /// Size class, 1 (light) to 4 (assault)
    pub sz: Option<u32>,
    /// Movement in inches
    pub mv: Option<u32>,
    /// Jump movement in inches
    pub mvj: Option<u32>,
    pub role: Option<Role>,
    /// Damage at short range
    pub ds: Option<u32>,
    /// Damage at medium range
    pub dm: Option<u32>,
    /// Damage at long range
    pub dl: Option<u32>,
    /// Damage at extreme range
    pub de: Option<u32>,
    /// Overheat value
    pub ov: Option<u32>,
    /// Armor
    pub a: Option<u32>,
    /// Structure
    pub s: Option<u32>,
    /// Added to whatever the parent template carries
    pub specials: Vec<Special>,
}

impl UnitStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_pv(mut self, pv: u32) -> Self {
        self.pv = Some(pv);
        self
    }

    pub fn with_tp(mut self, tp: UnitType) -> Self {
        self.tp = Some(tp);
        self
    }

    pub fn with_sz(mut self, sz: u32) -> Self {
        self.sz = Some(sz);
        self
    }

    pub fn with_mv(mut self, mv: u32) -> Self {
        self.mv = Some(mv);
        self
    }

    pub fn with_mvj(mut self, mvj: u32) -> Self {
        self.mvj = Some(mvj);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Set short, medium and long range damage
    pub fn with_damage(mut self, ds: u32, dm: u32, dl: u32) -> Self {
        self.ds = Some(ds);
        self.dm = Some(dm);
        self.dl = Some(dl);
        self
    }

    pub fn with_de(mut self, de: u32) -> Self {
        self.de = Some(de);
        self
    }

    pub fn with_ov(mut self, ov: u32) -> Self {
        self.ov = Some(ov);
        self
    }

    pub fn with_a(mut self, a: u32) -> Self {
        self.a = Some(a);
        self
    }

    pub fn with_s(mut self, s: u32) -> Self {
        self.s = Some(s);
        self
    }

    pub fn with_specials(mut self, specials: impl IntoIterator<Item = Special>) -> Self {
        self.specials = specials.into_iter().collect();
        self
    }
}

/// A stat block that may inherit from a parent template
///
/// Templates are immutable once built and are shared through `Arc`, so one
/// template can back any number of units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitTemplate {
    template: Option<Arc<UnitTemplate>>,
    stats: UnitStats,
}

impl UnitTemplate {
    /// Create a template; no attribute is required
    pub fn new(template: Option<Arc<UnitTemplate>>, stats: UnitStats) -> Self {
        Self { template, stats }
    }

    /// Wrap in an `Arc` for use as a parent
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// The parent template, if any
    pub fn template(&self) -> Option<&Arc<UnitTemplate>> {
        self.template.as_ref()
    }

    /// The values stored on this object, before any inheritance
    pub fn own_stats(&self) -> &UnitStats {
        &self.stats
    }

    /// Own value first, then the parent's resolved value
    fn resolve<'a, T, F>(&'a self, field: &F) -> Option<T>
    where
        F: Fn(&'a UnitStats) -> Option<T>,
    {
        field(&self.stats).or_else(|| {
            self.template
                .as_deref()
                .and_then(|parent| parent.resolve(field))
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.resolve(&|s| s.name.as_deref())
    }

    pub fn model(&self) -> Option<&str> {
        self.resolve(&|s| s.model.as_deref())
    }

    pub fn pv(&self) -> Option<u32> {
        self.resolve(&|s| s.pv)
    }

    pub fn tp(&self) -> Option<UnitType> {
        self.resolve(&|s| s.tp)
    }

    pub fn sz(&self) -> Option<u32> {
        self.resolve(&|s| s.sz)
    }

    pub fn mv(&self) -> Option<u32> {
        self.resolve(&|s| s.mv)
    }

    /// Jump movement; 0 when nothing in the chain sets it
    pub fn mvj(&self) -> u32 {
        self.resolve(&|s| s.mvj).unwrap_or(0)
    }

    pub fn role(&self) -> Option<Role> {
        self.resolve(&|s| s.role)
    }

    pub fn ds(&self) -> Option<u32> {
        self.resolve(&|s| s.ds)
    }

    pub fn dm(&self) -> Option<u32> {
        self.resolve(&|s| s.dm)
    }

    pub fn dl(&self) -> Option<u32> {
        self.resolve(&|s| s.dl)
    }

    pub fn de(&self) -> Option<u32> {
        self.resolve(&|s| s.de)
    }

    /// Overheat value; 0 when nothing in the chain sets it
    pub fn ov(&self) -> u32 {
        self.resolve(&|s| s.ov).unwrap_or(0)
    }

    pub fn a(&self) -> Option<u32> {
        self.resolve(&|s| s.a)
    }

    pub fn s(&self) -> Option<u32> {
        self.resolve(&|s| s.s)
    }

    /// Parent's resolved specials followed by this object's own, duplicates kept
    pub fn specials(&self) -> Vec<Special> {
        let mut specials = self
            .template
            .as_deref()
            .map(UnitTemplate::specials)
            .unwrap_or_default();
        specials.extend(self.stats.specials.iter().copied());
        specials
    }

    /// Format every resolved attribute using the given display options
    pub fn fmt_with(&self, config: &DisplayConfig) -> String {
        let text = |v: Option<&str>| v.map(|v| format!("\"{}\"", v));
        let num = |v: Option<u32>| v.map(|v| v.to_string());
        let specials = self
            .specials()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let parts = [
            ("name", text(self.name())),
            ("model", text(self.model())),
            ("pv", num(self.pv())),
            ("tp", self.tp().map(|t| config.label(t.label()))),
            ("sz", num(self.sz())),
            ("mv", num(self.mv())),
            ("mvj", Some(self.mvj().to_string())),
            ("role", self.role().map(|r| config.label(r.label()))),
            ("ds", num(self.ds())),
            ("dm", num(self.dm())),
            ("dl", num(self.dl())),
            ("de", num(self.de())),
            ("ov", Some(self.ov().to_string())),
            ("a", num(self.a())),
            ("s", num(self.s())),
            ("specials", Some(format!("[{}]", specials))),
        ];

        let body = parts
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}: {}",
                    name,
                    value.as_deref().unwrap_or(config.placeholder.as_str())
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", body)
    }
}

impl fmt::Display for UnitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt_with(&DisplayConfig::default()))
    }
}

/// Required attributes of a unit, resolved once at construction
#[derive(Debug, Clone, PartialEq, Eq)]
struct Required {
    name: String,
    model: String,
    pv: u32,
    tp: UnitType,
    sz: u32,
    mv: u32,
    a: u32,
    s: u32,
}

/// A fielded unit: a template whose required attributes all resolve
///
/// `name`, `model`, `pv`, `tp`, `sz`, `mv`, `a` and `s` must be set on the
/// unit itself or somewhere in its template chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    inner: UnitTemplate,
    required: Required,
}

impl Unit {
    /// Create a unit, failing on the first required attribute that does not resolve
    pub fn new(
        template: Option<Arc<UnitTemplate>>,
        stats: UnitStats,
    ) -> Result<Self, MissingFieldError> {
        let inner = UnitTemplate::new(template, stats);
        let required = Self::check_required(&inner).map_err(|err| {
            debug!(field = err.field, name = ?inner.name(), "unit is missing a required field");
            err
        })?;
        Ok(Self { inner, required })
    }

    fn check_required(t: &UnitTemplate) -> Result<Required, MissingFieldError> {
        fn req<T>(value: Option<T>, field: &'static str) -> Result<T, MissingFieldError> {
            value.ok_or(MissingFieldError::new(field))
        }

        Ok(Required {
            name: req(t.name(), "name")?.to_string(),
            model: req(t.model(), "model")?.to_string(),
            pv: req(t.pv(), "pv")?,
            tp: req(t.tp(), "tp")?,
            sz: req(t.sz(), "sz")?,
            mv: req(t.mv(), "mv")?,
            a: req(t.a(), "a")?,
            s: req(t.s(), "s")?,
        })
    }

    /// The unit viewed as a plain template, for optional attributes
    pub fn as_template(&self) -> &UnitTemplate {
        &self.inner
    }

    pub fn name(&self) -> &str {
        &self.required.name
    }

    pub fn model(&self) -> &str {
        &self.required.model
    }

    pub fn pv(&self) -> u32 {
        self.required.pv
    }

    pub fn tp(&self) -> UnitType {
        self.required.tp
    }

    pub fn sz(&self) -> u32 {
        self.required.sz
    }

    pub fn mv(&self) -> u32 {
        self.required.mv
    }

    pub fn a(&self) -> u32 {
        self.required.a
    }

    pub fn s(&self) -> u32 {
        self.required.s
    }

    pub fn mvj(&self) -> u32 {
        self.inner.mvj()
    }

    pub fn ov(&self) -> u32 {
        self.inner.ov()
    }

    pub fn specials(&self) -> Vec<Special> {
        self.inner.specials()
    }

    pub fn fmt_with(&self, config: &DisplayConfig) -> String {
        self.inner.fmt_with(config)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}
