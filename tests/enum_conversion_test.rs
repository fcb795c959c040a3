use switcher_utils::utils::logger::Verbosity;
use switcher_utils::{convert_enum, convert_enum_with, named_variants, PlatformId, UtilsError};

#[derive(Debug, Clone, Copy, PartialEq)]
enum JsEngineMode {
    Interpreter,
    Jit,
    Aot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum VendorMode {
    JIT,
    INTERPRETER,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum HostOs {
    MacOSX,
    Unix,
    Win32NT,
    Other,
}

named_variants!(JsEngineMode { Interpreter, Jit, Aot });
named_variants!(VendorMode { JIT, INTERPRETER });
named_variants!(HostOs { MacOSX, Unix, Win32NT, Other });

#[test]
fn test_vendor_enum_conversion() {
    assert_eq!(
        convert_enum::<JsEngineMode, VendorMode>(JsEngineMode::Jit).unwrap(),
        VendorMode::JIT
    );
    assert_eq!(
        convert_enum::<VendorMode, JsEngineMode>(VendorMode::INTERPRETER).unwrap(),
        JsEngineMode::Interpreter
    );
}

#[test]
fn test_unmatched_variant_reports_both_types() {
    let err = convert_enum::<JsEngineMode, VendorMode>(JsEngineMode::Aot).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("'Aot'"));
    assert!(message.contains("JsEngineMode"));
    assert!(message.contains("VendorMode"));
    assert!(matches!(err, UtilsError::EnumConversionFailed { .. }));
}

#[test]
fn test_platform_ids_convert_by_name() {
    let current: HostOs = match convert_enum(PlatformId::from_target_os("linux")) {
        Ok(os) => os,
        Err(e) => panic!("conversion failed: {}", e),
    };
    assert_eq!(current, HostOs::Unix);

    assert!(convert_enum::<PlatformId, HostOs>(PlatformId::WinCE).is_err());
}

#[test]
fn test_explicit_table_for_differently_named_variants() {
    let table = [
        (JsEngineMode::Interpreter, Verbosity::Info),
        (JsEngineMode::Jit, Verbosity::Debug),
    ];

    assert_eq!(convert_enum_with(JsEngineMode::Jit, &table).unwrap(), Verbosity::Debug);
    assert!(convert_enum_with(JsEngineMode::Aot, &table).is_err());
}
