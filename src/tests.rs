#![allow(missing_docs)]

pub fn init_tracing() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_max_level(tracing::Level::TRACE)
            .finish(),
    )
    .ok();
}

/// Logs every supported value type at `$severity` to `$sink` and collects the expected lines.
macro_rules! every_value {
    (@emit $sink:expr, $severity:expr, $expected:ident; $($label:literal => $value:expr => $line:literal,)+) => {
        $(
            $crate::emit!(sink: $sink, $severity, "T", $label, $value);
            $expected.push($line);
        )+
    };
    ($sink:expr, $severity:expr) => {{
        let mut owned: heapless::String<8> = heapless::String::new();
        owned.push_str("owned").expect("Must fit");

        let mut expected = std::vec::Vec::<&str>::new();

        every_value!(@emit $sink, $severity, expected;
            "uint8_t max" => u8::MAX => "uint8_t max: 255",
            "uint16_t max" => u16::MAX => "uint16_t max: 65535",
            "uint32_t max" => u32::MAX => "uint32_t max: 4294967295",
            "uint64_t max" => u64::MAX => "uint64_t max: 18446744073709551615",
            "int8_t min" => i8::MIN => "int8_t min: -128",
            "int16_t min" => i16::MIN => "int16_t min: -32768",
            "int32_t min" => i32::MIN => "int32_t min: -2147483648",
            "int64_t min" => i64::MIN => "int64_t min: -9223372036854775808",
            "int" => -5_isize => "int: -5",
            "unsigned int" => 7_usize => "unsigned int: 7",
            "float" => 3.3_f32 => "float: 3.300000",
            "double" => 2.5_f64 => "double: 2.500000000000",
            "char" => 'A' => "char: A",
            "bool true" => true => "bool true: true",
            "bool false" => false => "bool false: false",
            "string" => "Active" => "string: Active",
            "owned string" => owned => "owned string: owned",
            "c string" => *c"Active" => "c string: Active",
        );

        expected
    }};
}

pub(crate) use every_value;
