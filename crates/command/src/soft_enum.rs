//! Runtime-mutable named value sets.
//!
//! Every mutation publishes a new immutable snapshot, so a reader holding a
//! snapshot sees each enum either entirely before or entirely after an
//! update.

use std::sync::Arc;

use arc_swap::ArcSwap;
use indexmap::IndexSet;
use rustc_hash::FxHashMap as HashMap;

use crate::error::SoftEnumError;

/// Case sensitivity used when the caller does not specify one.
pub const DEFAULT_CASE_SENSITIVE: bool = true;

/// One soft enum: an ordered set of unique values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftEnum {
	values: IndexSet<String>,
	case_sensitive: bool,
}

impl SoftEnum {
	/// Builds an enum, dropping duplicate values after their first occurrence.
	pub fn new<I, S>(values: I, case_sensitive: bool) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			values: values.into_iter().map(Into::into).collect(),
			case_sensitive,
		}
	}

	/// Values in registration order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.values.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn case_sensitive(&self) -> bool {
		self.case_sensitive
	}

	/// Finds the registered spelling matching `token`.
	pub fn find(&self, token: &str) -> Option<&str> {
		if self.case_sensitive {
			self.values.get(token).map(String::as_str)
		} else {
			self.values().find(|v| v.eq_ignore_ascii_case(token))
		}
	}
}

/// Immutable view of every soft enum.
#[derive(Debug, Clone, Default)]
pub struct SoftEnumSnapshot {
	by_name: HashMap<Box<str>, Arc<SoftEnum>>,
}

impl SoftEnumSnapshot {
	#[inline]
	pub fn get(&self, name: &str) -> Option<&SoftEnum> {
		self.by_name.get(name).map(|e| &**e)
	}
}

/// Process-scoped store of soft enums.
pub struct SoftEnumRegistry {
	snap: ArcSwap<SoftEnumSnapshot>,
}

impl Default for SoftEnumRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl SoftEnumRegistry {
	pub fn new() -> Self {
		Self {
			snap: ArcSwap::from_pointee(SoftEnumSnapshot::default()),
		}
	}

	/// Creates or replaces the enum `name`.
	pub fn register<I, S>(&self, name: &str, values: I, case_sensitive: bool)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let entry = Arc::new(SoftEnum::new(values, case_sensitive));
		let replaced = self.publish(|snap| Ok(snap.by_name.insert(Box::from(name), entry.clone()).is_some()));
		tracing::debug!(soft_enum = name, values = entry.len(), case_sensitive, replaced = matches!(replaced, Ok(true)), "registered soft enum");
	}

	/// Replaces the values of an existing enum, keeping its case sensitivity.
	pub fn update<I, S>(&self, name: &str, values: I) -> Result<(), SoftEnumError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let values: Vec<String> = values.into_iter().map(Into::into).collect();
		let len = self.publish(|snap| {
			let existing = snap.by_name.get(name).ok_or_else(|| SoftEnumError::UnknownEnum(name.to_string()))?;
			let entry = SoftEnum::new(values.iter().cloned(), existing.case_sensitive);
			let len = entry.len();
			snap.by_name.insert(Box::from(name), Arc::new(entry));
			Ok(len)
		})?;
		tracing::debug!(soft_enum = name, values = len, "updated soft enum");
		Ok(())
	}

	/// Current values of one enum.
	pub fn get(&self, name: &str) -> Option<Arc<SoftEnum>> {
		self.snap.load().by_name.get(name).cloned()
	}

	/// Current snapshot of every enum.
	pub fn snapshot(&self) -> Arc<SoftEnumSnapshot> {
		self.snap.load_full()
	}

	/// Registered enum names, sorted.
	pub fn names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.snap.load().by_name.keys().map(|k| k.to_string()).collect();
		names.sort_unstable();
		names
	}

	/// Applies `edit` to a copy of the current snapshot and publishes it.
	///
	/// `edit` may run more than once if another writer publishes first.
	fn publish<R>(&self, mut edit: impl FnMut(&mut SoftEnumSnapshot) -> Result<R, SoftEnumError>) -> Result<R, SoftEnumError> {
		loop {
			let cur = self.snap.load_full();
			let mut next = (*cur).clone();
			let out = edit(&mut next)?;
			let prev = self.snap.compare_and_swap(&cur, Arc::new(next));
			if Arc::ptr_eq(&prev, &cur) {
				return Ok(out);
			}
		}
	}
}

#[cfg(test)]
mod tests;
