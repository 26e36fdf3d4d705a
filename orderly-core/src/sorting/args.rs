//! Construction arguments for comparators.
//!
//! Each argument is one explicit variant of [`SortArg`]; nothing is detected by
//! shape at runtime. The dynamic classifier in `classify` maps JSON input onto
//! the same variants.

use crate::collation::{Collation, SharedCollator};
use orderly_model::{Order, SortValue};
use std::fmt;
use std::sync::Arc;

/// Extracts a comparison operand directly from a record.
pub type Getter<T> = Arc<dyn Fn(&T) -> SortValue + Send + Sync>;

/// Rewrites an extracted operand before it is compared.
pub type Transform = Arc<dyn Fn(SortValue) -> SortValue + Send + Sync>;

/// Box a getter closure whose output converts into a [`SortValue`].
pub fn getter<T, V, F>(f: F) -> Getter<T>
where
    T: 'static,
    V: Into<SortValue>,
    F: Fn(&T) -> V + Send + Sync + 'static,
{
    Arc::new(move |record: &T| f(record).into())
}

/// One argument of a comparator construction call.
pub enum SortArg<T> {
    /// Dotted path, optionally prefixed with `-` for descending order.
    Path(String),
    /// Ascending getter.
    Getter(Getter<T>),
    PathConfig(PathConfig),
    GetterConfig(GetterConfig<T>),
    /// Global configuration. Only honoured as the last argument.
    Options(CompareOptions),
}

impl<T> SortArg<T> {
    pub fn path(path: impl Into<String>) -> Self {
        SortArg::Path(path.into())
    }

    /// Descending path; equivalent to `SortArg::path(format!("-{path}"))`.
    pub fn desc(path: impl AsRef<str>) -> Self {
        SortArg::Path(format!("-{}", path.as_ref()))
    }

    pub fn getter<V, F>(f: F) -> Self
    where
        T: 'static,
        V: Into<SortValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        SortArg::Getter(getter(f))
    }

    pub fn options(options: CompareOptions) -> Self {
        SortArg::Options(options)
    }

    pub(crate) fn variant_name(&self) -> &'static str {
        match self {
            SortArg::Path(_) => "path",
            SortArg::Getter(_) => "getter",
            SortArg::PathConfig(_) => "path config",
            SortArg::GetterConfig(_) => "getter config",
            SortArg::Options(_) => "options",
        }
    }
}

impl<T> fmt::Debug for SortArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortArg::Path(path) => f.debug_tuple("Path").field(path).finish(),
            SortArg::Getter(_) => f.write_str("Getter(..)"),
            SortArg::PathConfig(config) => f.debug_tuple("PathConfig").field(config).finish(),
            SortArg::GetterConfig(config) => {
                f.debug_tuple("GetterConfig").field(config).finish()
            }
            SortArg::Options(options) => f.debug_tuple("Options").field(options).finish(),
        }
    }
}

impl<T> From<&str> for SortArg<T> {
    fn from(path: &str) -> Self {
        SortArg::Path(path.to_string())
    }
}

impl<T> From<String> for SortArg<T> {
    fn from(path: String) -> Self {
        SortArg::Path(path)
    }
}

impl<T> From<PathConfig> for SortArg<T> {
    fn from(config: PathConfig) -> Self {
        SortArg::PathConfig(config)
    }
}

impl<T> From<GetterConfig<T>> for SortArg<T> {
    fn from(config: GetterConfig<T>) -> Self {
        SortArg::GetterConfig(config)
    }
}

impl<T> From<CompareOptions> for SortArg<T> {
    fn from(options: CompareOptions) -> Self {
        SortArg::Options(options)
    }
}

/// Explicit path rule.
///
/// A `-` prefix on `path` implies descending order when `order` is absent;
/// an explicit `Order::Desc` always wins, and `Order::Asc` does not cancel
/// the prefix.
#[derive(Clone, Default)]
pub struct PathConfig {
    pub path: String,
    pub order: Option<Order>,
    pub locale: Option<String>,
    pub collator: Option<SharedCollator>,
    /// Candidates substituted for a missing operand; the first whose kind
    /// matches the present operand is used.
    pub defaults: Vec<SortValue>,
    pub transform: Option<Transform>,
}

impl PathConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn ascending(self) -> Self {
        self.order(Order::Asc)
    }

    pub fn descending(self) -> Self {
        self.order(Order::Desc)
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn collator(mut self, collator: impl Collation + 'static) -> Self {
        self.collator = Some(Arc::new(collator));
        self
    }

    pub fn shared_collator(mut self, collator: SharedCollator) -> Self {
        self.collator = Some(collator);
        self
    }

    pub fn default_value(mut self, value: impl Into<SortValue>) -> Self {
        self.defaults.push(value.into());
        self
    }

    pub fn transform<F>(mut self, f: F) -> Self
    where
        F: Fn(SortValue) -> SortValue + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for PathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathConfig")
            .field("path", &self.path)
            .field("order", &self.order)
            .field("locale", &self.locale)
            .field("collator", &self.collator.as_ref().map(|c| c.name().into_owned()))
            .field("defaults", &self.defaults)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Explicit getter rule. Ascending unless `order` says otherwise.
pub struct GetterConfig<T> {
    pub get: Getter<T>,
    pub order: Option<Order>,
    pub locale: Option<String>,
    pub collator: Option<SharedCollator>,
}

impl<T> GetterConfig<T> {
    pub fn new<V, F>(f: F) -> Self
    where
        T: 'static,
        V: Into<SortValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self::from_getter(getter(f))
    }

    pub fn from_getter(get: Getter<T>) -> Self {
        Self {
            get,
            order: None,
            locale: None,
            collator: None,
        }
    }

    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn descending(self) -> Self {
        self.order(Order::Desc)
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn collator(mut self, collator: impl Collation + 'static) -> Self {
        self.collator = Some(Arc::new(collator));
        self
    }
}

impl<T> Clone for GetterConfig<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            order: self.order,
            locale: self.locale.clone(),
            collator: self.collator.clone(),
        }
    }
}

impl<T> fmt::Debug for GetterConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetterConfig")
            .field("order", &self.order)
            .field("locale", &self.locale)
            .field("collator", &self.collator.as_ref().map(|c| c.name().into_owned()))
            .finish_non_exhaustive()
    }
}

/// Global configuration for one construction call.
#[derive(Clone, Default)]
pub struct CompareOptions {
    /// Locale for the shared collator. Ignored when `collator` is set.
    pub locale: Option<String>,
    pub collator: Option<SharedCollator>,
    /// Default operands applied to every rule without its own defaults.
    pub defaults: Vec<SortValue>,
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_collator(mut self, collator: impl Collation + 'static) -> Self {
        self.collator = Some(Arc::new(collator));
        self
    }

    pub fn with_shared_collator(mut self, collator: SharedCollator) -> Self {
        self.collator = Some(collator);
        self
    }

    pub fn with_default(mut self, value: impl Into<SortValue>) -> Self {
        self.defaults.push(value.into());
        self
    }
}

impl fmt::Debug for CompareOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareOptions")
            .field("locale", &self.locale)
            .field("collator", &self.collator.as_ref().map(|c| c.name().into_owned()))
            .field("defaults", &self.defaults)
            .finish()
    }
}
