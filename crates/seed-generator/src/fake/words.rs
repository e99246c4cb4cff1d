//! Locale-independent vocabulary.

pub(super) const LOREM: &[&str] = &[
    "a", "ab", "accusamus", "ad", "adipisci", "alias", "aliquam", "amet", "animi", "aperiam",
    "architecto", "asperiores", "aut", "autem", "beatae", "commodi", "consectetur",
    "consequatur", "corporis", "culpa", "cum", "cumque", "debitis", "delectus", "deleniti",
    "deserunt", "dicta", "dignissimos", "distinctio", "dolor", "dolore", "dolorem", "doloremque",
    "dolores", "ducimus", "ea", "eaque", "earum", "eius", "eligendi", "enim", "eos", "error",
    "esse", "est", "et", "eum", "eveniet", "ex", "excepturi", "exercitationem", "expedita",
    "explicabo", "facere", "facilis", "fuga", "fugiat", "fugit", "harum", "hic", "id", "illo",
    "impedit", "in", "incidunt", "ipsa", "ipsam", "ipsum", "iste", "itaque", "iure", "labore",
    "laboriosam", "laudantium", "libero", "magnam", "magni", "maiores", "maxime", "minima",
    "minus", "modi", "molestiae", "mollitia", "nam", "natus", "necessitatibus", "nemo",
    "neque", "nesciunt", "nihil", "nisi", "nobis", "non", "nostrum", "nulla", "numquam",
    "obcaecati", "odio", "odit", "officia", "omnis", "optio", "pariatur", "perferendis",
    "perspiciatis", "placeat", "porro", "possimus", "praesentium", "provident", "quae",
    "quaerat", "quam", "quas", "quasi", "qui", "quia", "quibusdam", "quidem", "quis", "quisquam",
    "quo", "quod", "quos", "ratione", "recusandae", "reiciendis", "rem", "repellat",
    "repellendus", "reprehenderit", "rerum", "saepe", "sapiente", "sed", "sequi", "similique",
    "sint", "sit", "soluta", "sunt", "suscipit", "tempora", "tempore", "temporibus", "tenetur",
    "totam", "ullam", "unde", "ut", "vel", "velit", "veniam", "veritatis", "vero", "vitae",
    "voluptas", "voluptate", "voluptatem", "voluptates", "voluptatibus", "voluptatum",
];

pub(super) const JOBS: &[&str] = &[
    "Software Engineer", "Data Scientist", "Product Manager", "Research Associate",
    "Civil Engineer", "Mechanical Designer", "Chemical Process Engineer", "Biotechnologist",
    "Electrical Design Engineer", "Machine Learning Engineer", "UX Designer",
    "Business Analyst", "Embedded Systems Engineer", "Quality Assurance Analyst",
    "Technical Writer", "DevOps Engineer", "Site Reliability Engineer", "Financial Analyst",
    "Consultant", "Teaching Assistant", "Frontend Developer", "Backend Developer",
    "Mobile App Developer", "Cloud Architect", "Operations Manager",
];

pub(super) const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Advanced", "Automated", "Balanced", "Centralized", "Configurable",
    "Cross-platform", "Customer-focused", "Decentralized", "Digitized", "Distributed",
    "Enhanced", "Ergonomic", "Focused", "Front-line", "Fully-configurable", "Innovative",
    "Integrated", "Intuitive", "Managed", "Multi-layered", "Open-source", "Optimized",
    "Proactive", "Progressive", "Robust", "Seamless", "Streamlined", "Synergized", "Universal",
];

pub(super) const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asymmetric", "bottom-line", "client-driven", "contextually-based", "didactic",
    "dynamic", "empowering", "executive", "fresh-thinking", "global", "heuristic",
    "interactive", "local", "mission-critical", "modular", "multimedia", "needs-based",
    "real-time", "scalable", "static", "systematic", "transitional", "user-facing",
];

pub(super) const CATCH_PHRASE_NOUNS: &[&str] = &[
    "ability", "algorithm", "alliance", "application", "architecture", "capability",
    "challenge", "database", "framework", "hub", "infrastructure", "initiative", "interface",
    "methodology", "model", "moderator", "paradigm", "platform", "portal", "protocol",
    "solution", "strategy", "synergy", "toolset",
];

pub(super) const DOMAIN_WORDS: &[&str] = &[
    "tech", "labs", "works", "hub", "soft", "data", "cloud", "net", "logic", "wave", "bright",
    "nova", "pixel", "core", "spark",
];
