//! The constructed comparator and its fluent builder.

use super::args::{CompareOptions, GetterConfig, PathConfig, SortArg, getter};
use super::evaluator::{check_kinds, compare_values, order_values};
use super::parser::parse_args;
use super::rule::Rule;
use super::utils::apply_permutation;
use crate::error::{Result, SortError};
use crate::record::Record;
use orderly_model::SortValue;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Immutable multi-key comparator.
///
/// Rules are evaluated in construction order; the first rule that does not
/// tie decides the result. Cloning is cheap and clones share their rules, so a
/// comparator can be handed to any number of concurrent sorts.
pub struct Comparator<T> {
    rules: Arc<[Rule<T>]>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").field("rules", &self.rules).finish()
    }
}

impl<T> Comparator<T> {
    /// Build a comparator from construction arguments.
    ///
    /// Fails only for invalid paths and locales; see [`SortArg`] for how each
    /// argument is interpreted.
    pub fn new<I, A>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<SortArg<T>>,
    {
        let rules = parse_args(args.into_iter().map(Into::into).collect())?;
        Ok(Self {
            rules: rules.into(),
        })
    }

    pub fn builder() -> ComparatorBuilder<T> {
        ComparatorBuilder::new()
    }

    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

impl<T: Record> Comparator<T> {
    /// Compare two records.
    ///
    /// Path resolution failures and kind mismatches abort the whole
    /// comparison; they are never treated as a tie.
    pub fn compare(&self, a: &T, b: &T) -> Result<Ordering> {
        for rule in self.rules.iter() {
            let left = rule.extract(a)?;
            let right = rule.extract(b)?;

            match compare_values(rule, &left, &right)? {
                Ordering::Equal => continue,
                decided => return Ok(decided),
            }
        }

        Ok(Ordering::Equal)
    }

    /// A standalone comparison function sharing this comparator's rules.
    pub fn compare_fn(&self) -> impl Fn(&T, &T) -> Result<Ordering> + Clone + Send + Sync + use<T> {
        let comparator = self.clone();
        move |a: &T, b: &T| comparator.compare(a, b)
    }

    /// Stable in-place sort.
    ///
    /// Fails exactly when [`compare`](Self::compare) would fail for some pair
    /// of records: a rule's operand is only read, and only kind checked, for
    /// records that tie with another record on every earlier rule. Keys are
    /// prepared before any element moves, so on error the slice is left
    /// untouched.
    pub fn sort(&self, items: &mut [T]) -> Result<()> {
        debug!(items = items.len(), rules = self.rules.len(), "sorting records");

        let keys = self.sort_keys(items.len(), |rule, rows| {
            rows.iter().map(|&row| rule.extract(&items[row])).collect()
        })?;

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&i, &j| self.order_keys(&keys[i], &keys[j]));
        apply_permutation(items, order);

        Ok(())
    }

    /// Whether `items` is already in this comparator's order.
    pub fn is_sorted(&self, items: &[T]) -> Result<bool> {
        for pair in items.windows(2) {
            if self.compare(&pair[0], &pair[1])? == Ordering::Greater {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Per-record sort keys for `len` records, one column per rule.
    ///
    /// Records are refined rule by rule into groups that tie on every rule so
    /// far. Rule `k` is extracted (through `extract`, given the rule and the
    /// record indices) and kind checked only for records in a group of two or
    /// more, since no comparison reaches rule `k` for any other record. Cells
    /// that are never reached stay [`SortValue::Missing`].
    pub(crate) fn sort_keys<E>(&self, len: usize, extract: E) -> Result<Vec<Vec<SortValue>>>
    where
        E: Fn(&Rule<T>, &[usize]) -> Result<Vec<SortValue>>,
    {
        let mut keys = vec![vec![SortValue::Missing; self.rules.len()]; len];
        let mut groups: Vec<Vec<usize>> = if len > 1 {
            vec![(0..len).collect()]
        } else {
            Vec::new()
        };

        for (column, rule) in self.rules.iter().enumerate() {
            if groups.is_empty() {
                break;
            }

            let rows: Vec<usize> = groups.iter().flatten().copied().collect();
            for (row, value) in rows.iter().zip(extract(rule, &rows)?) {
                keys[*row][column] = value;
            }

            let mut ties = Vec::new();
            for mut group in groups {
                check_group_kinds(group.iter().map(|&row| &keys[row][column]))?;

                group.sort_by(|&a, &b| order_values(rule, &keys[a][column], &keys[b][column]));
                ties.extend(
                    group
                        .chunk_by(|&a, &b| {
                            order_values(rule, &keys[a][column], &keys[b][column]).is_eq()
                        })
                        .filter(|tied| tied.len() > 1)
                        .map(<[usize]>::to_vec),
                );
            }
            groups = ties;
        }

        Ok(keys)
    }

    pub(crate) fn order_keys(&self, a: &[SortValue], b: &[SortValue]) -> Ordering {
        self.rules
            .iter()
            .zip(a.iter().zip(b))
            .map(|(rule, (left, right))| order_values(rule, left, right))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

/// Reject a group that holds present operands of different kinds.
fn check_group_kinds<'a>(values: impl IntoIterator<Item = &'a SortValue>) -> Result<()> {
    let mut present = values.into_iter().filter(|value| !value.is_missing());

    if let Some(first) = present.next() {
        for value in present {
            check_kinds(first, value)?;
        }
    }
    Ok(())
}

/// Fluent construction of a [`Comparator`].
pub struct ComparatorBuilder<T> {
    args: Vec<SortArg<T>>,
    options: Option<CompareOptions>,
}

impl<T> Default for ComparatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ComparatorBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorBuilder")
            .field("pending_args", &self.args.len())
            .field("options", &self.options)
            .finish()
    }
}

impl<T> ComparatorBuilder<T> {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            options: None,
        }
    }

    /// Sort by a dotted path; a leading `-` sorts descending.
    pub fn by(mut self, path: impl Into<String>) -> Self {
        self.args.push(SortArg::Path(path.into()));
        self
    }

    pub fn by_desc(mut self, path: impl AsRef<str>) -> Self {
        self.args.push(SortArg::desc(path));
        self
    }

    pub fn by_key<V, F>(mut self, f: F) -> Self
    where
        T: 'static,
        V: Into<SortValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.args.push(SortArg::Getter(getter(f)));
        self
    }

    pub fn by_path(mut self, config: PathConfig) -> Self {
        self.args.push(SortArg::PathConfig(config));
        self
    }

    pub fn by_getter(mut self, config: GetterConfig<T>) -> Self {
        self.args.push(SortArg::GetterConfig(config));
        self
    }

    pub fn arg(mut self, arg: impl Into<SortArg<T>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Global options; always applied as the trailing argument.
    pub fn options(mut self, options: CompareOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn build(self) -> Result<Comparator<T>> {
        let mut args = self.args;
        if let Some(options) = self.options {
            args.push(SortArg::Options(options));
        }
        Comparator::new(args)
    }
}

impl<T> TryFrom<ComparatorBuilder<T>> for Comparator<T> {
    type Error = SortError;

    fn try_from(builder: ComparatorBuilder<T>) -> Result<Self> {
        builder.build()
    }
}
