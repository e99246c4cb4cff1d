//! Locale-specific vocabulary.

use crate::context::Locale;

pub(super) struct LocaleData {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub email_domains: &'static [&'static str],
    pub url_tlds: &'static [&'static str],
    pub phone_patterns: &'static [&'static str],
}

static EN_IN: LocaleData = LocaleData {
    first_names: &[
        "Aarav", "Vivaan", "Aditya", "Vihaan", "Arjun", "Sai", "Reyansh", "Ayaan", "Krishna",
        "Ishaan", "Shaurya", "Atharv", "Kabir", "Rohan", "Dhruv", "Ananya", "Diya", "Aadhya",
        "Saanvi", "Myra", "Anika", "Kiara", "Pari", "Navya", "Ira", "Meera", "Riya", "Tara",
        "Kavya", "Nisha",
    ],
    last_names: &[
        "Sharma", "Verma", "Gupta", "Iyer", "Reddy", "Nair", "Patel", "Singh", "Kumar", "Das",
        "Chatterjee", "Banerjee", "Mehta", "Joshi", "Kapoor", "Malhotra", "Rao", "Pillai",
        "Menon", "Bhat", "Kulkarni", "Desai", "Shah", "Agarwal", "Mishra",
    ],
    cities: &[
        "Mumbai", "Delhi", "Bengaluru", "Hyderabad", "Ahmedabad", "Chennai", "Kolkata", "Pune",
        "Jaipur", "Lucknow", "Kanpur", "Nagpur", "Indore", "Bhopal", "Patna", "Vadodara",
        "Kharagpur", "Kochi", "Coimbatore", "Chandigarh",
    ],
    company_suffixes: &["Ltd", "Pvt Ltd", "Group", "and Sons", "Industries", "Technologies"],
    email_domains: &["gmail.com", "yahoo.co.in", "hotmail.com", "rediffmail.com"],
    url_tlds: &["com", "in", "co.in", "net", "org"],
    phone_patterns: &["+91 9{rand:9}", "+91 8{rand:9}", "+91 7{rand:9}", "0{rand:2}-{rand:8}"],
};

static EN_US: LocaleData = LocaleData {
    first_names: &[
        "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
        "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
        "Sarah", "Charles", "Karen",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Taylor", "Moore",
    ],
    cities: &[
        "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
        "San Antonio", "San Diego", "Dallas", "Austin", "Seattle", "Boston",
    ],
    company_suffixes: &["Inc", "LLC", "Group", "and Sons", "PLC", "Ltd"],
    email_domains: &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"],
    url_tlds: &["com", "net", "org", "biz", "info"],
    phone_patterns: &["({rand:3}) {rand:3}-{rand:4}", "+1-{rand:3}-{rand:3}-{rand:4}"],
};

pub(super) fn data(locale: Locale) -> &'static LocaleData {
    match locale {
        Locale::EnIn => &EN_IN,
        Locale::EnUs => &EN_US,
    }
}
