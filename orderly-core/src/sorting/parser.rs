//! Turns construction arguments into the ordered rule list.

use super::args::{CompareOptions, GetterConfig, PathConfig, SortArg};
use super::rule::{Rule, ValueSource};
use crate::collation::{LocaleCollator, SharedCollator};
use crate::error::Result;
use orderly_model::{Direction, Order, SortPath, SortValue};
use std::sync::Arc;
use tracing::{debug, warn};

/// Settings shared by every rule that does not override them.
struct Resolved {
    collator: SharedCollator,
    defaults: Arc<[SortValue]>,
}

impl Resolved {
    fn from_options(options: CompareOptions) -> Result<Self> {
        // Built exactly once per construction call, even when no rule needs it.
        let collator = match (options.collator, options.locale) {
            (Some(collator), _) => collator,
            (None, Some(locale)) => Arc::new(LocaleCollator::new(&locale)?),
            (None, None) => Arc::new(LocaleCollator::natural()?),
        };

        Ok(Self {
            collator,
            defaults: present_defaults(options.defaults),
        })
    }

    fn collator_for(
        &self,
        collator: Option<SharedCollator>,
        locale: Option<&str>,
    ) -> Result<SharedCollator> {
        match (collator, locale) {
            (Some(collator), _) => Ok(collator),
            (None, Some(locale)) => Ok(Arc::new(LocaleCollator::new(locale)?)),
            (None, None) => Ok(Arc::clone(&self.collator)),
        }
    }

    fn rule<T>(&self, direction: Direction, source: ValueSource<T>) -> Rule<T> {
        Rule {
            direction,
            source,
            collator: Arc::clone(&self.collator),
            defaults: Arc::clone(&self.defaults),
            transform: None,
        }
    }
}

// A missing default can never be substituted for anything.
fn present_defaults(defaults: Vec<SortValue>) -> Arc<[SortValue]> {
    defaults.into_iter().filter(|value| !value.is_missing()).collect()
}

/// Build the rule list for one construction call.
///
/// A trailing [`SortArg::Options`] is the global configuration. Options
/// anywhere else are dropped, which mirrors how unrecognised arguments are
/// handled by the dynamic classifier.
pub(crate) fn parse_args<T>(mut args: Vec<SortArg<T>>) -> Result<Vec<Rule<T>>> {
    let options = match args.pop() {
        Some(SortArg::Options(options)) => options,
        Some(other) => {
            args.push(other);
            CompareOptions::default()
        }
        None => CompareOptions::default(),
    };

    let resolved = Resolved::from_options(options)?;
    let mut rules = Vec::with_capacity(args.len());

    for (position, arg) in args.into_iter().enumerate() {
        match arg {
            SortArg::Path(raw) => {
                let SortPath { path, direction } = SortPath::parse(&raw)?;
                rules.push(resolved.rule(direction, ValueSource::Path(path)));
            }
            SortArg::Getter(get) => {
                rules.push(resolved.rule(Direction::Ascending, ValueSource::Getter(get)));
            }
            SortArg::PathConfig(config) => rules.push(path_config_rule(&resolved, config)?),
            SortArg::GetterConfig(config) => rules.push(getter_config_rule(&resolved, config)?),
            other @ SortArg::Options(_) => {
                warn!(
                    position,
                    kind = other.variant_name(),
                    "ignoring options that are not the last sort argument"
                );
            }
        }
    }

    debug!(
        rules = rules.len(),
        collator = %resolved.collator.name(),
        defaults = resolved.defaults.len(),
        "built comparator rules"
    );

    Ok(rules)
}

fn path_config_rule<T>(resolved: &Resolved, config: PathConfig) -> Result<Rule<T>> {
    let SortPath { path, direction } = SortPath::parse(&config.path)?;
    let direction = match config.order {
        Some(Order::Desc) => Direction::Descending,
        Some(Order::Asc) | None => direction,
    };

    let collator = resolved.collator_for(config.collator, config.locale.as_deref())?;
    let defaults = if config.defaults.is_empty() {
        Arc::clone(&resolved.defaults)
    } else {
        present_defaults(config.defaults)
    };

    Ok(Rule {
        direction,
        source: ValueSource::Path(path),
        collator,
        defaults,
        transform: config.transform,
    })
}

fn getter_config_rule<T>(resolved: &Resolved, config: GetterConfig<T>) -> Result<Rule<T>> {
    let direction = config.order.map_or(Direction::Ascending, Direction::from);
    let collator = resolved.collator_for(config.collator, config.locale.as_deref())?;

    Ok(Rule {
        direction,
        source: ValueSource::Getter(config.get),
        collator,
        defaults: Arc::clone(&resolved.defaults),
        transform: None,
    })
}
