// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cardinality estimation: how many distinct values an encoded field produces.
//!
//! `None` always means "unknown or unbounded, estimate elsewhere", never zero.

use crate::binning;
use crate::encoding::EncodingDef;
use crate::stats::{FieldStatistics, NullFilter};
use crate::time::TimeUnit;
use crate::types::FieldType;

/// Cardinality implied by the definition's time unit.
///
/// Fixed-size units return their bucket count. `year` returns the distinct count
/// of the `"year_<field>"` statistics, minus one when the field has missing values
/// and nulls are filtered for `field_type`; `None` if those statistics are absent.
/// No time unit returns `None`.
///
/// The `year` adjustment removes at most one missing bucket, however many
/// missing representations the data has.
pub fn time_unit_cardinality(
    def: &EncodingDef,
    stats: &FieldStatistics,
    filter_null: &NullFilter,
    field_type: FieldType,
) -> Option<u64> {
    match def.time_unit? {
        TimeUnit::Year => {
            let name = def.name.as_deref()?;
            let year_stats = stats.bucketed(TimeUnit::Year, name)?;
            let drop_null = stats.get(name).is_some_and(|s| s.missing > 0)
                && filter_null.filters(field_type);
            Some(year_stats.distinct.saturating_sub(u64::from(drop_null)))
        }
        unit => unit.cardinality(),
    }
}

/// Effective number of distinct values of an encoded field.
///
/// - binned fields: the number of bins covering the field's numeric extent,
/// - fields with a time unit: [`time_unit_cardinality`], when known,
/// - otherwise: the distinct count, minus the null bucket when nulls are filtered
///   for the field's type.
///
/// `None` when the statistics needed are missing.
pub fn field_cardinality(
    def: &EncodingDef,
    stats: &FieldStatistics,
    filter_null: &NullFilter,
) -> Option<u64> {
    if let Some(max_bins) = def.bin.max_bins() {
        let (min, max) = stats.get(def.name.as_deref()?)?.numeric_extent()?;
        return binning::bins(min, max, max_bins).map(|b| b.count());
    }
    if let Some(cardinality) = time_unit_cardinality(def, stats, filter_null, def.field_type) {
        return Some(cardinality);
    }
    let stat = stats.get(def.name.as_deref()?)?;
    let drop_null = stat.missing > 0 && filter_null.filters(def.field_type);
    Some(stat.distinct.saturating_sub(u64::from(drop_null)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Bin, BinParams};
    use crate::stats::FieldStats;

    fn temporal(unit: TimeUnit) -> EncodingDef {
        EncodingDef::new("date", FieldType::Temporal).with_time_unit(unit)
    }

    #[test]
    fn fixed_units_ignore_statistics() {
        let stats = FieldStatistics::new()
            .with("date", FieldStats::distinct(1000).with_missing(4))
            .with("year_date", FieldStats::distinct(9));
        let expected = [
            (TimeUnit::Seconds, 60),
            (TimeUnit::Minutes, 60),
            (TimeUnit::Hours, 24),
            (TimeUnit::Day, 7),
            (TimeUnit::Date, 31),
            (TimeUnit::Month, 12),
        ];
        for (unit, n) in expected {
            for s in [&stats, &FieldStatistics::new()] {
                let got = time_unit_cardinality(
                    &temporal(unit),
                    s,
                    &NullFilter::default(),
                    FieldType::Temporal,
                );
                assert_eq!(got, Some(n), "{unit:?}");
            }
        }
    }

    #[test]
    fn year_without_bucketed_stats_is_unknown() {
        let stats = FieldStatistics::new().with("date", FieldStats::distinct(100));
        let def = temporal(TimeUnit::Year);
        assert_eq!(
            time_unit_cardinality(&def, &stats, &NullFilter::default(), FieldType::Temporal),
            None
        );
    }

    #[test]
    fn year_uses_bucketed_distinct_count() {
        let stats = FieldStatistics::new()
            .with("date", FieldStats::distinct(100))
            .with("year_date", FieldStats::distinct(12));
        let def = temporal(TimeUnit::Year);
        assert_eq!(
            time_unit_cardinality(&def, &stats, &NullFilter::default(), FieldType::Temporal),
            Some(12)
        );
    }

    #[test]
    fn year_drops_one_null_bucket_when_filtering() {
        let stats = FieldStatistics::new()
            .with("date", FieldStats::distinct(100).with_missing(7))
            .with("year_date", FieldStats::distinct(12));
        let def = temporal(TimeUnit::Year);
        let filter = NullFilter::default();
        assert_eq!(
            time_unit_cardinality(&def, &stats, &filter, FieldType::Temporal),
            Some(11)
        );
        // The policy is looked up by the type passed in, not the definition's.
        assert_eq!(
            time_unit_cardinality(&def, &stats, &filter, FieldType::Ordinal),
            Some(12)
        );
        assert_eq!(
            time_unit_cardinality(&def, &stats, &NullFilter::KEEP_ALL, FieldType::Temporal),
            Some(12)
        );
    }

    #[test]
    fn no_time_unit_is_unknown() {
        let stats = FieldStatistics::new().with("date", FieldStats::distinct(100));
        let def = EncodingDef::new("date", FieldType::Temporal);
        assert_eq!(
            time_unit_cardinality(&def, &stats, &NullFilter::default(), FieldType::Temporal),
            None
        );
    }

    #[test]
    fn quantitative_uses_distinct_count() {
        let stats =
            FieldStatistics::new().with("2", FieldStats::distinct(10).with_extent(0.0, 150.0));
        let def = EncodingDef::new("2", FieldType::Quantitative);
        assert_eq!(field_cardinality(&def, &stats, &NullFilter::default()), Some(10));
    }

    #[test]
    fn binned_quantitative_uses_bin_count() {
        let stats =
            FieldStatistics::new().with("2", FieldStats::distinct(10).with_extent(0.0, 150.0));
        let def = EncodingDef::new("2", FieldType::Quantitative)
            .with_bin(Bin::Params(BinParams { maxbins: Some(15) }));
        assert_eq!(field_cardinality(&def, &stats, &NullFilter::default()), Some(15));
    }

    #[test]
    fn nulls_are_removed_per_type_policy() {
        let stats = FieldStatistics::new().with("origin", FieldStats::distinct(4).with_missing(2));
        let nominal = EncodingDef::new("origin", FieldType::Nominal);
        assert_eq!(field_cardinality(&nominal, &stats, &NullFilter::default()), Some(4));
        let filter = NullFilter::default().with(FieldType::Nominal, true);
        assert_eq!(field_cardinality(&nominal, &stats, &filter), Some(3));
    }

    #[test]
    fn temporal_falls_back_to_distinct_count() {
        let stats = FieldStatistics::new().with("date", FieldStats::distinct(40).with_missing(1));
        let year = temporal(TimeUnit::Year);
        assert_eq!(field_cardinality(&year, &stats, &NullFilter::default()), Some(39));
        assert_eq!(
            field_cardinality(&temporal(TimeUnit::Month), &stats, &NullFilter::default()),
            Some(12)
        );
    }

    #[test]
    fn missing_statistics_are_unknown() {
        let def = EncodingDef::new("nope", FieldType::Quantitative);
        assert_eq!(field_cardinality(&def, &FieldStatistics::new(), &NullFilter::default()), None);
        let binned = def.with_bin(Bin::Enabled(true));
        let stats = FieldStatistics::new().with("nope", FieldStats::distinct(3));
        assert_eq!(field_cardinality(&binned, &stats, &NullFilter::default()), None);
    }
}
