//! Static keyword tables for the classifier

use crate::domain::Category;

pub const SECURITY_KEYWORDS: &[&str] = &[
    "security",
    "infosec",
    "cybersecurity",
    "pentest",
    "hacking",
    "vulnerability",
    "exploit",
    "malware",
    "encryption",
    "authentication",
    "firewall",
    "threat",
    "attack",
    "defense",
    "privacy",
    "forensic",
    "audit",
    "sigma",
    "hackernews",
    "hacker",
    "autodr",
    "autobook",
    "signal",
];

pub const MACHINE_LEARNING_KEYWORDS: &[&str] = &[
    "machine-learning",
    "ml",
    "ai",
    "artificial-intelligence",
    "data-science",
    "neural",
    "deep-learning",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit",
    "pandas",
    "numpy",
    "computer-vision",
    "nlp",
    "prediction",
    "model",
    "algorithm",
    "training",
    "classification",
    "regression",
    "open",
    "assistant",
    "detection",
    "xr",
    "video",
    "lense",
];

// Short entries like "ea" and "ao" also match inside unrelated words.
pub const BLOCKCHAIN_KEYWORDS: &[&str] = &[
    "blockchain",
    "crypto",
    "cryptocurrency",
    "web3",
    "solidity",
    "ethereum",
    "bitcoin",
    "smart-contract",
    "defi",
    "nft",
    "dapp",
    "token",
    "wallet",
    "mining",
    "consensus",
    "hardhat",
    "chainlink",
    "datastreams",
    "ens",
    "near",
    "perps",
    "perp",
    "tbot",
    "pancake",
    "smartcontract",
    "lottery",
    "openweathermap",
    "ea",
    "ao",
];

/// Scored categories in tie-break order. [`Category::OtherStuff`] is the
/// unscored default and never appears here.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (Category::InformationSecurity, SECURITY_KEYWORDS),
    (Category::MachineLearning, MACHINE_LEARNING_KEYWORDS),
    (Category::BlockchainStuff, BLOCKCHAIN_KEYWORDS),
];

/// Lowercased names always filed under Other-Stuff.
pub const OTHER_OVERRIDES: &[&str] = &[
    "demo-microsaas",
    "reg-boa",
    "docker-python-chromedriver",
    "perpdex",
    "django-bot",
    "spring-boot-microservices-example",
];
