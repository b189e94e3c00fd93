/// Candidate secret words. All lowercase a-z.
pub const WORDS: &[&str] = &[
    "about", "account", "across", "addition", "adjustment", "advertisement", "agreement",
    "amount", "amusement", "angle", "animal", "answer", "apparatus", "approval", "argument",
    "attack", "attempt", "attention", "balance", "basket", "behavior", "belief", "birth",
    "bottle", "brain", "branch", "breath", "brick", "bridge", "brother", "brush", "bucket",
    "button", "camera", "canvas", "carriage", "cause", "chain", "chance", "change", "cheese",
    "chest", "church", "circle", "clock", "cloud", "comfort", "committee", "company",
    "comparison", "competition", "condition", "connection", "control", "copper", "cotton",
    "country", "cover", "credit", "curtain", "cushion", "damage", "danger", "daughter",
    "decision", "degree", "design", "desire", "destruction", "detail", "development",
    "digestion", "direction", "discovery", "discussion", "disease", "distance", "division",
    "drawer", "driving", "education", "effect", "engine", "error", "event", "example",
    "exchange", "existence", "expansion", "experience", "expert", "feather", "feeling",
    "fiction", "finger", "flame", "flight", "flower", "foolish", "force", "friend", "garden",
    "grain", "grammar", "guide", "hammer", "harbor", "harmony", "history", "humor", "impulse",
    "increase", "industry", "insect", "instrument", "interest", "invention", "island",
    "journey", "kettle", "knowledge", "language", "leather", "letter", "level", "library",
    "lightning", "linen", "liquid", "machine", "manager", "market", "measure", "memory",
    "metal", "middle", "minute", "mountain", "muscle", "nation", "needle", "network",
    "number", "ocean", "office", "opinion", "orange", "organization", "ornament", "owner",
    "parcel", "pencil", "picture", "pleasure", "pocket", "poison", "porter", "potato",
    "powder", "present", "prison", "process", "produce", "profit", "property", "protest",
    "pump", "punishment", "purpose", "quality", "question", "railway", "reaction", "react",
    "reading", "reason", "record", "regret", "relation", "religion", "request", "rhythm",
    "river", "scissors", "screw", "selection", "sentence", "servant", "shelf", "signal",
    "silver", "sister", "society", "stocking", "stomach", "story", "street", "structure",
    "substance", "summer", "support", "surprise", "system", "teaching", "theory", "thread",
    "thunder", "ticket", "transport", "trouble", "umbrella", "valley", "vessel", "voice",
    "waiting", "weather", "whistle", "window", "winter", "wrench", "writing",
];
