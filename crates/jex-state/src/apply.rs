//! The mutation engine: pure application of edit operations.
//!
//! [`apply`] takes a document and an [`EditOp`], resolves the operation's
//! path against the document, and returns a brand-new document with the
//! terminal change made. The input document is never mutated: either a
//! complete new root is returned or the typed failure is, with the input
//! untouched. Given the same `(document, op)` the result is always the
//! same.

use crate::{
    error::{value_type_name, TreeError, TreeResult},
    EditOp, Path, Seg,
};
use serde_json::Value;

/// Apply one edit operation to a document (pure function).
///
/// # Examples
///
/// ```
/// use jex_state::{apply, path, EditOp};
/// use serde_json::json;
///
/// let doc = json!({"a": 1, "b": [10, 20, 30]});
/// let out = apply(&doc, &EditOp::delete(path!("b", 1))).unwrap();
/// assert_eq!(out, json!({"a": 1, "b": [10, 30]}));
///
/// // The input is unchanged.
/// assert_eq!(doc, json!({"a": 1, "b": [10, 20, 30]}));
/// ```
pub fn apply(doc: &Value, op: &EditOp) -> TreeResult<Value> {
    let mut result = doc.clone();
    apply_op(&mut result, op)?;
    Ok(result)
}

/// Apply a sequence of operations in order (pure function).
///
/// All-or-nothing: if any operation fails, the error is returned and the
/// input document is unchanged.
pub fn apply_all<'a>(
    doc: &Value,
    ops: impl IntoIterator<Item = &'a EditOp>,
) -> TreeResult<Value> {
    let mut result = doc.clone();
    for op in ops {
        apply_op(&mut result, op)?;
    }
    Ok(result)
}

/// Get a reference to the node at a path, if the path resolves.
pub fn get_at_path<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = doc;
    for seg in path.segments() {
        match seg {
            Seg::Key(key) => current = current.get(key)?,
            Seg::Index(idx) => current = current.get(idx)?,
        }
    }
    Some(current)
}

/// Apply a single operation to a document in place.
///
/// Every terminal change validates before mutating, so a returned error
/// means the document was not touched.
fn apply_op(doc: &mut Value, op: &EditOp) -> TreeResult<()> {
    match op {
        EditOp::Set { path, value } => apply_set(doc, path, value.clone()),
        EditOp::Delete { path } => apply_delete(doc, path),
        EditOp::Rename { path, new_key } => apply_rename(doc, path, new_key),
        EditOp::Append { path, value } => apply_append(doc, path, value.clone()),
        EditOp::InsertField { path, key, value } => {
            apply_insert_field(doc, path, key, value.clone())
        }
        EditOp::Reorder { path, target_index } => apply_reorder(doc, path, *target_index),
    }
}

/// Resolve the node at `full[..full.len() - skip_last]`, failing with a
/// typed error naming the prefix that did not resolve.
fn resolve_mut<'a>(
    current: &'a mut Value,
    full: &Path,
    consumed: usize,
    skip_last: usize,
) -> TreeResult<&'a mut Value> {
    if consumed + skip_last >= full.len() {
        return Ok(current);
    }

    let seg = &full[consumed];
    let error_path = || Path::from_segments(full.segments()[..=consumed].to_vec());

    let child = match (seg, &mut *current) {
        (Seg::Key(key), Value::Object(obj)) => obj
            .get_mut(key)
            .ok_or_else(|| TreeError::path_not_found(error_path()))?,
        (Seg::Index(idx), Value::Array(arr)) => {
            let len = arr.len();
            arr.get_mut(*idx)
                .ok_or_else(|| TreeError::index_out_of_bounds(error_path(), *idx, len))?
        }
        (Seg::Key(_), other) => {
            return Err(TreeError::type_mismatch(
                error_path(),
                "object",
                value_type_name(other),
            ))
        }
        (Seg::Index(_), other) => {
            return Err(TreeError::type_mismatch(
                error_path(),
                "array",
                value_type_name(other),
            ))
        }
    };
    resolve_mut(child, full, consumed + 1, skip_last)
}

/// Resolve the parent container of the path's final segment.
fn resolve_parent_mut<'a>(doc: &'a mut Value, path: &Path) -> TreeResult<&'a mut Value> {
    resolve_mut(doc, path, 0, 1)
}

fn apply_set(doc: &mut Value, path: &Path, value: Value) -> TreeResult<()> {
    // The empty path replaces the whole document.
    if path.is_empty() {
        *doc = value;
        return Ok(());
    }

    let last = path.last().expect("non-empty path");
    let parent = resolve_parent_mut(doc, path)?;

    match (&mut *parent, last) {
        (Value::Object(obj), Seg::Key(key)) => {
            // Existing keys keep their position; new keys append at the end.
            obj.insert(key.clone(), value);
            Ok(())
        }
        (Value::Array(arr), Seg::Index(idx)) => {
            let len = arr.len();
            let slot = arr
                .get_mut(*idx)
                .ok_or_else(|| TreeError::index_out_of_bounds(path.clone(), *idx, len))?;
            *slot = value;
            Ok(())
        }
        (other, seg) => Err(terminal_mismatch(path, seg, other)),
    }
}

fn apply_delete(doc: &mut Value, path: &Path) -> TreeResult<()> {
    if path.is_empty() {
        return Err(TreeError::invalid_operation("cannot delete the document root"));
    }

    let last = path.last().expect("non-empty path");
    let parent = resolve_parent_mut(doc, path)?;

    match (&mut *parent, last) {
        (Value::Object(obj), Seg::Key(key)) => {
            // shift_remove keeps the order of the remaining keys.
            obj.shift_remove(key)
                .map(|_| ())
                .ok_or_else(|| TreeError::path_not_found(path.clone()))
        }
        (Value::Array(arr), Seg::Index(idx)) => {
            if *idx >= arr.len() {
                return Err(TreeError::index_out_of_bounds(path.clone(), *idx, arr.len()));
            }
            arr.remove(*idx);
            Ok(())
        }
        (other, seg) => Err(terminal_mismatch(path, seg, other)),
    }
}

fn apply_rename(doc: &mut Value, path: &Path, new_key: &str) -> TreeResult<()> {
    if path.is_empty() {
        return Err(TreeError::invalid_operation("cannot rename the document root"));
    }

    let last = path.last().expect("non-empty path");
    let parent = resolve_parent_mut(doc, path)?;

    match (&mut *parent, last) {
        (Value::Array(_), _) => Err(TreeError::invalid_operation(
            "array elements are addressed by index, not renamed",
        )),
        (Value::Object(obj), Seg::Key(old_key)) => {
            if !obj.contains_key(old_key) {
                return Err(TreeError::path_not_found(path.clone()));
            }
            // Rebuild the map so the renamed entry keeps the old key's
            // position. A pre-existing entry at `new_key` is overwritten.
            let entries = std::mem::take(obj);
            for (key, value) in entries {
                if key == *old_key {
                    obj.insert(new_key.to_owned(), value);
                } else if key == new_key {
                    // Dropped: collision policy is overwrite.
                } else {
                    obj.insert(key, value);
                }
            }
            Ok(())
        }
        (other, seg) => Err(terminal_mismatch(path, seg, other)),
    }
}

fn apply_append(doc: &mut Value, path: &Path, value: Value) -> TreeResult<()> {
    let target = resolve_mut(doc, path, 0, 0)?;
    match target {
        Value::Array(arr) => {
            arr.push(value);
            Ok(())
        }
        other => Err(TreeError::type_mismatch(
            path.clone(),
            "array",
            value_type_name(other),
        )),
    }
}

fn apply_insert_field(doc: &mut Value, path: &Path, key: &str, value: Value) -> TreeResult<()> {
    let target = resolve_mut(doc, path, 0, 0)?;
    match target {
        Value::Object(obj) => {
            // New keys append at the end; an existing key is overwritten
            // in place, same policy as rename.
            obj.insert(key.to_owned(), value);
            Ok(())
        }
        other => Err(TreeError::type_mismatch(
            path.clone(),
            "object",
            value_type_name(other),
        )),
    }
}

fn apply_reorder(doc: &mut Value, path: &Path, target_index: usize) -> TreeResult<()> {
    if path.is_empty() {
        return Err(TreeError::invalid_operation(
            "the document root has no siblings to reorder",
        ));
    }

    let last = path.last().expect("non-empty path");
    let parent = resolve_parent_mut(doc, path)?;

    match (&mut *parent, last) {
        (Value::Array(arr), Seg::Index(from)) => {
            if *from >= arr.len() {
                return Err(TreeError::index_out_of_bounds(path.clone(), *from, arr.len()));
            }
            if target_index >= arr.len() {
                return Err(reorder_out_of_range(target_index, arr.len()));
            }
            if *from != target_index {
                let moved = arr.remove(*from);
                arr.insert(target_index, moved);
            }
            Ok(())
        }
        (Value::Object(obj), Seg::Key(key)) => {
            let Some(from) = obj.keys().position(|k| k == key) else {
                return Err(TreeError::path_not_found(path.clone()));
            };
            if target_index >= obj.len() {
                return Err(reorder_out_of_range(target_index, obj.len()));
            }
            if from != target_index {
                let mut entries: Vec<(String, Value)> =
                    std::mem::take(obj).into_iter().collect();
                let moved = entries.remove(from);
                entries.insert(target_index, moved);
                obj.extend(entries);
            }
            Ok(())
        }
        (other, seg) => Err(terminal_mismatch(path, seg, other)),
    }
}

fn reorder_out_of_range(target_index: usize, len: usize) -> TreeError {
    TreeError::invalid_operation(format!(
        "reorder target {target_index} out of range 0..{len}"
    ))
}

/// Mismatch between the final segment's kind and its parent container.
/// Reported at the parent path, the prefix that failed to hold up.
fn terminal_mismatch(path: &Path, seg: &Seg, found: &Value) -> TreeError {
    let expected = match seg {
        Seg::Key(_) => "object",
        Seg::Index(_) => "array",
    };
    let parent = path.parent().unwrap_or_else(Path::root);
    TreeError::type_mismatch(parent, expected, value_type_name(found))
}
