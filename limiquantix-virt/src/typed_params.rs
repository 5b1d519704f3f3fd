//! Safe views over `virTypedParameter` arrays.
//!
//! Many libvirt calls take or return arrays of named, typed values (block
//! tuning, job statistics, migration parameters). [`decode`] turns a native
//! array into owned Rust values and [`TypedParams`] builds one through the
//! library's own allocation helpers so it can be handed back to libvirt.

use std::ffi::{CStr, CString};
use std::fmt;
use std::os::raw::c_int;
use std::ptr;

use serde::Serialize;
use tracing::debug;

use crate::api::Libvirt;
use crate::error::VirError;
use crate::ffi::*;

/// The value of one typed parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TypedParamValue {
    Int(i32),
    UInt(u32),
    LLong(i64),
    ULLong(u64),
    Double(f64),
    Boolean(bool),
    String(String),
}

impl TypedParamValue {
    /// The `VIR_TYPED_PARAM_*` type code for this value.
    pub fn type_code(&self) -> c_int {
        match self {
            TypedParamValue::Int(_) => VIR_TYPED_PARAM_INT,
            TypedParamValue::UInt(_) => VIR_TYPED_PARAM_UINT,
            TypedParamValue::LLong(_) => VIR_TYPED_PARAM_LLONG,
            TypedParamValue::ULLong(_) => VIR_TYPED_PARAM_ULLONG,
            TypedParamValue::Double(_) => VIR_TYPED_PARAM_DOUBLE,
            TypedParamValue::Boolean(_) => VIR_TYPED_PARAM_BOOLEAN,
            TypedParamValue::String(_) => VIR_TYPED_PARAM_STRING,
        }
    }
}

/// A named typed parameter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedParam {
    pub field: String,
    pub value: TypedParamValue,
}

/// Copy `nparams` entries starting at `params` into owned values.
///
/// Entries with an unknown type code are skipped.
///
/// # Safety
/// `params` must be null or point to `nparams` initialized entries whose
/// string values, if any, are valid NUL-terminated strings.
pub unsafe fn decode(params: *const virTypedParameter, nparams: c_int) -> Vec<TypedParam> {
    if params.is_null() || nparams <= 0 {
        return Vec::new();
    }

    let entries = std::slice::from_raw_parts(params, nparams as usize);
    entries.iter().filter_map(|entry| decode_one(entry)).collect()
}

unsafe fn decode_one(entry: &virTypedParameter) -> Option<TypedParam> {
    let field = field_name(&entry.field);
    let value = match entry.type_ {
        VIR_TYPED_PARAM_INT => TypedParamValue::Int(entry.value.i),
        VIR_TYPED_PARAM_UINT => TypedParamValue::UInt(entry.value.ui),
        VIR_TYPED_PARAM_LLONG => TypedParamValue::LLong(entry.value.l),
        VIR_TYPED_PARAM_ULLONG => TypedParamValue::ULLong(entry.value.ul),
        VIR_TYPED_PARAM_DOUBLE => TypedParamValue::Double(entry.value.d),
        VIR_TYPED_PARAM_BOOLEAN => TypedParamValue::Boolean(entry.value.b != 0),
        VIR_TYPED_PARAM_STRING => {
            let s = entry.value.s;
            let text = if s.is_null() {
                String::new()
            } else {
                CStr::from_ptr(s).to_string_lossy().into_owned()
            };
            TypedParamValue::String(text)
        }
        other => {
            debug!(field = %field, type_code = other, "Skipping typed parameter of unknown type");
            return None;
        }
    };

    Some(TypedParam { field, value })
}

fn field_name(raw: &[std::os::raw::c_char; VIR_TYPED_PARAM_FIELD_LENGTH]) -> String {
    let bytes: Vec<u8> = raw.iter().take_while(|&&c| c != 0).map(|&c| c as u8).collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// A typed parameter array allocated and grown by libvirt.
///
/// The array is released with `virTypedParamsFree` when dropped.
pub struct TypedParams<'a> {
    lv: &'a Libvirt,
    params: virTypedParameterPtr,
    nparams: c_int,
    maxparams: c_int,
}

impl<'a> TypedParams<'a> {
    pub fn new(lv: &'a Libvirt) -> Self {
        Self {
            lv,
            params: ptr::null_mut(),
            nparams: 0,
            maxparams: 0,
        }
    }

    /// Append `name = value`.
    ///
    /// Fails with the libvirt error when the native helper rejects the entry
    /// or is unavailable.
    pub fn add(&mut self, name: &str, value: TypedParamValue) -> Result<&mut Self, VirError> {
        let c_name = CString::new(name)
            .map_err(|_| VirError::internal(format!("parameter name {name:?} contains NUL")))?;
        let mut err = VirError::default();
        let (params, nparams, maxparams) = (&mut self.params, &mut self.nparams, &mut self.maxparams);
        let name = c_name.as_ptr();

        // SAFETY: the three out-pointers belong to this builder and were only
        // ever written by libvirt's own helpers.
        let rc = unsafe {
            match &value {
                TypedParamValue::Int(v) => {
                    self.lv.virTypedParamsAddInt(params, nparams, maxparams, name, *v, &mut err)
                }
                TypedParamValue::UInt(v) => {
                    self.lv.virTypedParamsAddUInt(params, nparams, maxparams, name, *v, &mut err)
                }
                TypedParamValue::LLong(v) => {
                    self.lv.virTypedParamsAddLLong(params, nparams, maxparams, name, *v, &mut err)
                }
                TypedParamValue::ULLong(v) => {
                    self.lv.virTypedParamsAddULLong(params, nparams, maxparams, name, *v, &mut err)
                }
                TypedParamValue::Double(v) => {
                    self.lv.virTypedParamsAddDouble(params, nparams, maxparams, name, *v, &mut err)
                }
                TypedParamValue::Boolean(v) => self.lv.virTypedParamsAddBoolean(
                    params,
                    nparams,
                    maxparams,
                    name,
                    c_int::from(*v),
                    &mut err,
                ),
                TypedParamValue::String(v) => {
                    let c_value = CString::new(v.as_str()).map_err(|_| {
                        VirError::internal(format!("value of parameter {:?} contains NUL", c_name))
                    })?;
                    self.lv.virTypedParamsAddString(
                        params,
                        nparams,
                        maxparams,
                        name,
                        c_value.as_ptr(),
                        &mut err,
                    )
                }
            }
        };

        if rc < 0 {
            if !err.is_set() {
                err = VirError::internal("virTypedParamsAdd failed without reporting an error");
            }
            return Err(err);
        }
        Ok(self)
    }

    /// Pointer to the first entry, for passing to libvirt.
    pub fn as_ptr(&self) -> virTypedParameterPtr {
        self.params
    }

    pub fn len(&self) -> usize {
        self.nparams.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.nparams <= 0
    }

    /// Entry count in the form libvirt expects.
    pub fn count(&self) -> c_int {
        self.nparams
    }

    /// Owned copy of the current entries.
    pub fn to_vec(&self) -> Vec<TypedParam> {
        // SAFETY: `params` holds `nparams` entries initialized by libvirt.
        unsafe { decode(self.params, self.nparams) }
    }
}

impl Drop for TypedParams<'_> {
    fn drop(&mut self) {
        if self.params.is_null() {
            return;
        }
        let mut err = VirError::default();
        // SAFETY: the array was allocated by libvirt and is freed exactly once.
        unsafe { self.lv.virTypedParamsFree(self.params, self.nparams, &mut err) };
        self.params = ptr::null_mut();
        self.nparams = 0;
    }
}

impl fmt::Debug for TypedParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedParams")
            .field("nparams", &self.nparams)
            .field("maxparams", &self.maxparams)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::c_char;

    fn entry(name: &str, type_: c_int, value: virTypedParameterValue) -> virTypedParameter {
        let mut field = [0 as c_char; VIR_TYPED_PARAM_FIELD_LENGTH];
        for (dst, src) in field.iter_mut().zip(name.bytes()) {
            *dst = src as c_char;
        }
        virTypedParameter { field, type_, value }
    }

    #[test]
    fn test_decode_all_types() {
        let text = CString::new("writeback").unwrap();
        let entries = [
            entry("vcpus", VIR_TYPED_PARAM_INT, virTypedParameterValue { i: -2 }),
            entry("weight", VIR_TYPED_PARAM_UINT, virTypedParameterValue { ui: 500 }),
            entry("delta", VIR_TYPED_PARAM_LLONG, virTypedParameterValue { l: -1 << 40 }),
            entry("bytes", VIR_TYPED_PARAM_ULLONG, virTypedParameterValue { ul: 1 << 40 }),
            entry("ratio", VIR_TYPED_PARAM_DOUBLE, virTypedParameterValue { d: 0.5 }),
            entry("enabled", VIR_TYPED_PARAM_BOOLEAN, virTypedParameterValue { b: 1 }),
            entry(
                "cache",
                VIR_TYPED_PARAM_STRING,
                virTypedParameterValue { s: text.as_ptr() as *mut c_char },
            ),
        ];

        let decoded = unsafe { decode(entries.as_ptr(), entries.len() as c_int) };
        let values: Vec<_> = decoded.iter().map(|p| (p.field.as_str(), p.value.clone())).collect();
        assert_eq!(
            values,
            vec![
                ("vcpus", TypedParamValue::Int(-2)),
                ("weight", TypedParamValue::UInt(500)),
                ("delta", TypedParamValue::LLong(-1 << 40)),
                ("bytes", TypedParamValue::ULLong(1 << 40)),
                ("ratio", TypedParamValue::Double(0.5)),
                ("enabled", TypedParamValue::Boolean(true)),
                ("cache", TypedParamValue::String("writeback".into())),
            ]
        );
    }

    #[test]
    fn test_decode_skips_unknown_types() {
        let entries = [
            entry("mystery", 99, virTypedParameterValue { i: 1 }),
            entry("known", VIR_TYPED_PARAM_INT, virTypedParameterValue { i: 3 }),
        ];
        let decoded = unsafe { decode(entries.as_ptr(), 2) };
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].field, "known");
    }

    #[test]
    fn test_decode_null_and_empty() {
        assert!(unsafe { decode(ptr::null(), 4) }.is_empty());
        let entries = [entry("x", VIR_TYPED_PARAM_INT, virTypedParameterValue { i: 1 })];
        assert!(unsafe { decode(entries.as_ptr(), 0) }.is_empty());
    }

    #[test]
    fn test_type_codes() {
        assert_eq!(TypedParamValue::Boolean(false).type_code(), VIR_TYPED_PARAM_BOOLEAN);
        assert_eq!(TypedParamValue::String(String::new()).type_code(), VIR_TYPED_PARAM_STRING);
    }

    #[test]
    fn test_builder_debug_shows_counts() {
        let lv = Libvirt::new(std::sync::Arc::new(crate::mock::MockSource::new()));
        let params = TypedParams::new(&lv);

        let shown = format!("{params:?}");
        assert!(shown.starts_with("TypedParams"));
        assert!(shown.contains("nparams: 0"));
        assert!(shown.contains("maxparams: 0"));
    }
}
