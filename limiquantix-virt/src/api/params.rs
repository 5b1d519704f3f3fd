//! `virTypedParams*` helpers for building and reading typed parameter arrays.

use std::os::raw::{c_char, c_double, c_int, c_longlong, c_uint, c_ulonglong};

use crate::ffi::*;

libvirt_api! {
    pub(crate) struct ParamSymbols => params, Core;

    fn virTypedParamsAddBoolean(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_int,
    ) -> c_int [Negative];
    fn virTypedParamsAddDouble(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_double,
    ) -> c_int [Negative];
    fn virTypedParamsAddFromString(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        type_: c_int,
        value: *const c_char,
    ) -> c_int [Negative];
    fn virTypedParamsAddInt(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_int,
    ) -> c_int [Negative];
    fn virTypedParamsAddLLong(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_longlong,
    ) -> c_int [Negative];
    fn virTypedParamsAddString(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: *const c_char,
    ) -> c_int [Negative];
    fn virTypedParamsAddStringList(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        values: *mut *const c_char,
    ) -> c_int [Negative];
    fn virTypedParamsAddUInt(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_uint,
    ) -> c_int [Negative];
    fn virTypedParamsAddULLong(
        params: *mut virTypedParameterPtr,
        nparams: *mut c_int,
        maxparams: *mut c_int,
        name: *const c_char,
        value: c_ulonglong,
    ) -> c_int [Negative];
    fn virTypedParamsClear(params: virTypedParameterPtr, nparams: c_int) -> () [Never];
    fn virTypedParamsFree(params: virTypedParameterPtr, nparams: c_int) -> () [Never];
    fn virTypedParamsGet(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
    ) -> virTypedParameterPtr [Null];
    fn virTypedParamsGetBoolean(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_int,
    ) -> c_int [Negative];
    fn virTypedParamsGetDouble(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_double,
    ) -> c_int [Negative];
    fn virTypedParamsGetInt(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_int,
    ) -> c_int [Negative];
    fn virTypedParamsGetLLong(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_longlong,
    ) -> c_int [Negative];
    fn virTypedParamsGetString(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut *const c_char,
    ) -> c_int [Negative];
    fn virTypedParamsGetUInt(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_uint,
    ) -> c_int [Negative];
    fn virTypedParamsGetULLong(
        params: virTypedParameterPtr,
        nparams: c_int,
        name: *const c_char,
        value: *mut c_ulonglong,
    ) -> c_int [Negative];
}
