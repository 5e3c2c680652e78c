use chrono::{Days, NaiveDate};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Sample course feed generator
// ---------------------------------------------------------------------------
//
// Writes a deterministic `courses.json` next to the binary.  Pin codes and
// dates deliberately rotate through the encodings the real feed mixes
// (numeric vs string pin codes, four date formats), so the loader's
// normalization paths are exercised by the checked-in sample.

struct District {
    name: &'static str,
    pin_base: u32,
    address: &'static str,
}

const DISTRICTS: &[District] = &[
    District {
        name: "Bengaluru",
        pin_base: 560001,
        address: "5 MG Road",
    },
    District {
        name: "Mysuru",
        pin_base: 570001,
        address: "12 Temple Road",
    },
    District {
        name: "Tumakuru",
        pin_base: 572101,
        address: "3 Market Street",
    },
    District {
        name: "Mangaluru",
        pin_base: 575001,
        address: "8 Beach Road",
    },
    District {
        name: "Hubballi",
        pin_base: 580020,
        address: "21 Station Road",
    },
];

const COURSE_TYPES: &[&str] = &[
    "Happiness Program",
    "Sahaj Samadhi Meditation",
    "Youth Empowerment Seminar",
    "Sri Sri Yoga",
];

const TEACHERS: &[&str] = &["Asha Rao", "Ravi Kumar", "Meera Hegde", "Vijay Shetty"];
const LANGUAGES: &[&str] = &["Kannada", "English", "Hindi"];

fn format_date(date: NaiveDate, variant: usize) -> String {
    match variant % 4 {
        0 => date.format("%Y-%m-%d").to_string(),
        1 => date.format("%d/%m/%Y").to_string(),
        2 => date.format("%d-%m-%Y").to_string(),
        _ => date.format("%B %e, %Y").to_string().replace("  ", " "),
    }
}

fn main() {
    let first_start =
        NaiveDate::from_ymd_opt(2025, 1, 6).expect("valid start of the course calendar");

    let mut records: Vec<Value> = Vec::new();
    let mut row = 0usize;

    for (d, district) in DISTRICTS.iter().enumerate() {
        for (c, course_type) in COURSE_TYPES.iter().enumerate() {
            let start = first_start
                .checked_add_days(Days::new((row * 9) as u64))
                .expect("start date in range");
            let end = start
                .checked_add_days(Days::new(6))
                .expect("end date in range");

            let pin_code = district.pin_base + (c as u32 % 3);
            // Alternate the encodings the wild feed mixes.
            let pin_value: Value = if row % 2 == 0 {
                json!(pin_code)
            } else {
                json!(pin_code.to_string())
            };

            records.push(json!({
                "course_type": course_type,
                "register_link": format!("https://courses.example.org/register/{}", row + 1),
                "start": format_date(start, row),
                "end": format_date(end, row + 1),
                "district": district.name,
                "address": format!("{}, {}", district.address, district.name),
                "pin_code": pin_value,
                "teachers": TEACHERS[(d + c) % TEACHERS.len()],
                "contact": format!("+91 9{:04} {:05}", 8000 + row * 37, 10000 + row * 911),
                "language": LANGUAGES[(d + c) % LANGUAGES.len()],
            }));
            row += 1;
        }
    }

    let output_path = "courses.json";
    let text = serde_json::to_string_pretty(&records).expect("serializing sample records");
    std::fs::write(output_path, text).expect("writing sample file");

    println!("Wrote {} courses to {output_path}", records.len());
}
