pub static TEST_COMPANIES_CSV_FILE_PATH: &str = "tests/test_companies.csv";

pub static SAMPLE_COMPANIES_JSON: &str = r#"{
    "TCS": "Tata Consultancy Services Limited",
    "TCL": "Tata Consultancy Labs",
    "INFY": "Infosys Limited",
    "M&M": "Mahindra & Mahindra Limited",
    "NEWCO": "New Company Limited"
}"#;

pub static SAMPLE_DRIVE_LINKS_JSON: &str = r#"{
    "TCS": {
        "Q1 FY25": {
            "presentation": "https://drive.example/tcs-q1-presentation",
            "report": "https://drive.example/tcs-q1-report"
        }
    },
    "INFY": {
        "Q4 FY24": {
            "presentation": "https://drive.example/infy-q4-presentation"
        }
    },
    "M&M": {}
}"#;
