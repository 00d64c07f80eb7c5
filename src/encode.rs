//! Text payloads for `print_json` and `print_struct`.
//!
//! Encoding never fails the call: when a value cannot be encoded, the failure message is the
//! payload.

use core::fmt;

use serde::ser::{self, Serialize};

/// JSON text of `value`, or the reason it has none.
///
/// `serde_json` writes non-finite floats as `null`. Those are rejected here instead, yielding
/// `json: unsupported value: NaN` (or `+Inf` / `-Inf`).
pub fn json_payload<T: Serialize + ?Sized>(value: &T) -> String {
    if let Err(e) = value.serialize(&mut FiniteProbe) {
        return e.to_string();
    }

    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => format!("json: {}", e),
    }
}

/// `Debug` text of `value`.
pub fn struct_payload<T: fmt::Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}

#[derive(Debug)]
pub(crate) struct Unsupported(String);

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "json: {}", self.0)
    }
}

impl std::error::Error for Unsupported {}

impl ser::Error for Unsupported {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Unsupported(msg.to_string())
    }
}

fn check_finite(v: f64) -> Result<(), Unsupported> {
    if v.is_nan() {
        Err(Unsupported("unsupported value: NaN".to_string()))
    } else if v.is_infinite() {
        let sign = if v > 0.0 { '+' } else { '-' };
        Err(Unsupported(format!("unsupported value: {}Inf", sign)))
    } else {
        Ok(())
    }
}

/// Walks a value without producing output, failing on the first non-finite float.
pub(crate) struct FiniteProbe;

type Probed = Result<(), Unsupported>;

macro_rules! accept {
    ($($method:ident($ty:ty)),* $(,)?) => {
        $(
            fn $method(self, _v: $ty) -> Probed {
                Ok(())
            }
        )*
    };
}

impl<'a> ser::Serializer for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    accept! {
        serialize_bool(bool),
        serialize_i8(i8), serialize_i16(i16), serialize_i32(i32), serialize_i64(i64),
        serialize_i128(i128),
        serialize_u8(u8), serialize_u16(u16), serialize_u32(u32), serialize_u64(u64),
        serialize_u128(u128),
        serialize_char(char),
        serialize_str(&str),
        serialize_bytes(&[u8]),
        serialize_unit_struct(&'static str),
    }

    fn serialize_f32(self, v: f32) -> Probed {
        check_finite(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Probed {
        check_finite(v)
    }

    fn serialize_none(self) -> Probed {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Probed {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Probed {
        Ok(())
    }

    fn serialize_unit_variant(
        self, _name: &'static str, _index: u32, _variant: &'static str
    ) -> Probed {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self, _name: &'static str, value: &T
    ) -> Probed {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self, _name: &'static str, _index: u32, _variant: &'static str, value: &T
    ) -> Probed {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self, _name: &'static str, _len: usize
    ) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self, _name: &'static str, _index: u32, _variant: &'static str, _len: usize
    ) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_struct(
        self, _name: &'static str, _len: usize
    ) -> Result<Self, Unsupported> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self, _name: &'static str, _index: u32, _variant: &'static str, _len: usize
    ) -> Result<Self, Unsupported> {
        Ok(self)
    }
}

impl<'a> ser::SerializeSeq for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleVariant for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeMap for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Probed {
        key.serialize(&mut **self)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeStruct for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self, _key: &'static str, value: &T
    ) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}

impl<'a> ser::SerializeStructVariant for &'a mut FiniteProbe {
    type Ok = ();
    type Error = Unsupported;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self, _key: &'static str, value: &T
    ) -> Probed {
        value.serialize(&mut **self)
    }

    fn end(self) -> Probed {
        Ok(())
    }
}
