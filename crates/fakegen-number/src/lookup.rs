//! Registration of the `number` category.

use crate::numeric;
use fakegen_core::{Info, LookupError, LookupValue, Param, ParamType, Registry, RegistryError};
use std::fmt::Display;
use tracing::debug;

/// Category label shared by every generator registered here.
pub const CATEGORY: &str = "number";

/// Register every number generator into `registry`.
pub fn add_number_lookup(registry: &mut Registry) -> Result<(), RegistryError> {
    let before = registry.len();

    registry.add_lookup_data(
        "number",
        Info::new(
            CATEGORY,
            "Random number between given range",
            "14866",
            |args, rng| {
                let min = args.int("min")?;
                let max = args.int("max")?;
                check_bounds(min, max)?;
                Ok(LookupValue::Int64(numeric::number(rng, min, max)))
            },
        )
        .with_param(
            Param::new("min", ParamType::Int, "Minimum integer value")
                .with_default(i32::MIN.to_string()),
        )
        .with_param(
            Param::new("max", ParamType::Int, "Maximum integer value")
                .with_default(i32::MAX.to_string()),
        ),
    )?;

    registry.add_lookup_data(
        "intrange",
        Info::new(
            CATEGORY,
            "Random int64 between given range",
            "-4057748471508647189",
            |args, rng| {
                let min = args.int("min")?;
                let max = args.int("max")?;
                check_bounds(min, max)?;
                Ok(LookupValue::Int64(numeric::int_range(rng, min, max)))
            },
        )
        .with_param(
            Param::new("min", ParamType::Int, "Minimum integer value")
                .with_default(i64::MIN.to_string()),
        )
        .with_param(
            Param::new("max", ParamType::Int, "Maximum integer value")
                .with_default(i64::MAX.to_string()),
        ),
    )?;

    registry.add_lookup_data(
        "uintrange",
        Info::new(
            CATEGORY,
            "Random uint64 between given range",
            "11780365595674266390",
            |args, rng| {
                let min = args.uint("min")?;
                let max = args.uint("max")?;
                check_bounds(min, max)?;
                Ok(LookupValue::Uint64(numeric::int_range(rng, min, max)))
            },
        )
        .with_param(
            Param::new("min", ParamType::Uint, "Minimum unsigned integer value").with_default("0"),
        )
        .with_param(
            Param::new("max", ParamType::Uint, "Maximum unsigned integer value")
                .with_default(u64::MAX.to_string()),
        ),
    )?;

    registry.add_lookup_data(
        "uint8",
        Info::new(CATEGORY, "Random uint8 value", "152", |_, rng| {
            Ok(LookupValue::Uint8(numeric::uint8(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "uint16",
        Info::new(CATEGORY, "Random uint16 value", "34968", |_, rng| {
            Ok(LookupValue::Uint16(numeric::uint16(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "uint32",
        Info::new(CATEGORY, "Random uint32 value", "1075055705", |_, rng| {
            Ok(LookupValue::Uint32(numeric::uint32(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "uint64",
        Info::new(CATEGORY, "Random uint64 value", "843730692693298265", |_, rng| {
            Ok(LookupValue::Uint64(numeric::uint64(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "int8",
        Info::new(CATEGORY, "Random int8 value", "24", |_, rng| {
            Ok(LookupValue::Int8(numeric::int8(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "int16",
        Info::new(CATEGORY, "Random int16 value", "2200", |_, rng| {
            Ok(LookupValue::Int16(numeric::int16(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "int32",
        Info::new(CATEGORY, "Random int32 value", "-1072427943", |_, rng| {
            Ok(LookupValue::Int32(numeric::int32(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "int64",
        Info::new(CATEGORY, "Random int64 value", "-8379641344161477543", |_, rng| {
            Ok(LookupValue::Int64(numeric::int64(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "float32",
        Info::new(CATEGORY, "Random float32 value", "3.1128167e+37", |_, rng| {
            Ok(LookupValue::Float32(numeric::float32(rng)))
        }),
    )?;

    registry.add_lookup_data(
        "float32range",
        Info::new(
            CATEGORY,
            "Random float32 between given range",
            "914774.6",
            |args, rng| {
                let min = args.float32("min")?;
                let max = args.float32("max")?;
                check_float_bounds(min, max, min.is_finite() && max.is_finite())?;
                Ok(LookupValue::Float32(numeric::float32_range(rng, min, max)))
            },
        )
        .with_param(Param::new("min", ParamType::Float32, "Minimum float32 value"))
        .with_param(Param::new("max", ParamType::Float32, "Maximum float32 value")),
    )?;

    registry.add_lookup_data(
        "float64",
        Info::new(
            CATEGORY,
            "Random float64 value",
            "1.644484108270445e+307",
            |_, rng| Ok(LookupValue::Float64(numeric::float64(rng))),
        ),
    )?;

    registry.add_lookup_data(
        "float64range",
        Info::new(
            CATEGORY,
            "Random float64 between given range",
            "914774.5585333086",
            |args, rng| {
                let min = args.float64("min")?;
                let max = args.float64("max")?;
                check_float_bounds(min, max, min.is_finite() && max.is_finite())?;
                Ok(LookupValue::Float64(numeric::float64_range(rng, min, max)))
            },
        )
        .with_param(Param::new("min", ParamType::Float64, "Minimum float64 value"))
        .with_param(Param::new("max", ParamType::Float64, "Maximum float64 value")),
    )?;

    registry.add_lookup_data(
        "shuffleints",
        Info::new(
            CATEGORY,
            "Shuffle an array of ints",
            "1,2,3,4 => 3,1,4,2",
            |args, rng| {
                let mut ints = args.int_array("ints")?.to_vec();
                numeric::shuffle_ints(rng, &mut ints);
                Ok(LookupValue::IntArray(ints))
            },
        )
        .with_param(Param::new("ints", ParamType::IntArray, "Comma separated ints")),
    )?;

    registry.add_lookup_data(
        "randomint",
        Info::new(
            CATEGORY,
            "Random int chosen from an array of ints",
            "-1,2,-3,4 => -3",
            |args, rng| {
                let ints = args.int_array("ints")?;
                numeric::random_int(rng, ints)
                    .map(LookupValue::Int64)
                    .ok_or_else(|| LookupError::validation("ints must contain at least one value"))
            },
        )
        .with_param(Param::new("ints", ParamType::IntArray, "Comma separated ints")),
    )?;

    debug!(
        category = CATEGORY,
        registered = registry.len() - before,
        "Registered number generators"
    );
    Ok(())
}

fn check_bounds<T: PartialOrd + Display>(min: T, max: T) -> Result<(), LookupError> {
    if min > max {
        return Err(LookupError::validation(format!(
            "max ({max}) must be greater than or equal to min ({min})"
        )));
    }
    Ok(())
}

fn check_float_bounds<T: PartialOrd + Display>(
    min: T,
    max: T,
    finite: bool,
) -> Result<(), LookupError> {
    if !finite {
        return Err(LookupError::validation(format!(
            "min ({min}) and max ({max}) must be finite"
        )));
    }
    check_bounds(min, max)
}
