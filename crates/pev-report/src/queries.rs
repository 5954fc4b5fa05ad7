//! Fixed analysis queries over `patient_events`.
//!
//! Medians use middle-rank selection: order the values, skip `(n - 1) / 2`,
//! take one value when `n` is odd and two when it is even, and average what
//! was taken. Every result is truncated to an integer.

pub const VALID_PATIENTS: &str = "SELECT COUNT(DISTINCT patient_id) FROM patient_events";

/// Days between each patient's first and last event.
pub const TIMELINE_SPREAD: &str = "
    WITH lengths AS (
        SELECT JULIANDAY(MAX(DATE(date))) - JULIANDAY(MIN(DATE(date))) AS value
        FROM patient_events
        GROUP BY patient_id
    ),
    ranked AS (
        SELECT value FROM lengths WHERE value IS NOT NULL
    )
    SELECT
        CAST(MAX(value) AS INTEGER),
        CAST(MIN(value) AS INTEGER),
        CAST((
            SELECT AVG(value) FROM (
                SELECT value FROM ranked
                ORDER BY value
                LIMIT 2 - (SELECT COUNT(*) FROM ranked) % 2
                OFFSET (SELECT (COUNT(*) - 1) / 2 FROM ranked)
            )
        ) AS INTEGER)
    FROM ranked
";

pub const GENDER_COUNTS: &str = "
    SELECT gender, COUNT(*)
    FROM (SELECT DISTINCT patient_id, gender FROM patient_events)
    GROUP BY gender
    ORDER BY gender
";

/// Whole years between birth and each patient's last event.
pub const AGE_SPREAD: &str = "
    WITH ages AS (
        SELECT JULIANDAY(MAX(DATE(date))) - JULIANDAY(birth_date) AS value
        FROM patient_events
        GROUP BY patient_id, birth_date
    ),
    ranked AS (
        SELECT value FROM ages WHERE value IS NOT NULL
    )
    SELECT
        CAST(MAX(value) / 365 AS INTEGER),
        CAST(MIN(value) / 365 AS INTEGER),
        CAST((
            SELECT AVG(value) FROM (
                SELECT value FROM ranked
                ORDER BY value
                LIMIT 2 - (SELECT COUNT(*) FROM ranked) % 2
                OFFSET (SELECT (COUNT(*) - 1) / 2 FROM ranked)
            )
        ) / 365 AS INTEGER)
    FROM ranked
";
