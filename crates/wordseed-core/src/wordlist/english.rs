//! Built-in English vocabulary.
//!
//! 1024 words, every one at least three letters long and unique on its first
//! three letters across the whole list.

pub(super) const ENGLISH: [&str; 1024] = [
    "abandon", "ability", "able", "about", "absent", "abuse", "access", "acid", "acoustic",
    "acquire", "across", "act", "adapt", "add", "adjust", "admit", "adult", "advance", "aerobic",
    "affair", "afraid", "age", "agree", "ahead", "aim", "air", "aisle", "alarm", "album", "alcohol",
    "alert", "alien", "all", "almost", "alone", "alpha", "also", "alter", "always", "amateur",
    "among", "amused", "analyst", "anchor", "anger", "animal", "ankle", "announce", "another",
    "answer", "anxiety", "any", "apart", "apology", "appear", "april", "arch", "area", "argue",
    "arm", "around", "arrange", "art", "ask", "assault", "asthma", "athlete", "atom", "attack",
    "auction", "audit", "august", "aunt", "author", "average", "avocado", "awake", "awesome",
    "awkward", "axis", "baby", "bachelor", "badge", "bag", "balance", "bamboo", "banana", "bar",
    "base", "battle", "beach", "because", "before", "begin", "behave", "believe", "bench", "best",
    "betray", "beyond", "bicycle", "bid", "bike", "bind", "biology", "bird", "bitter", "bleak",
    "blind", "blood", "blue", "board", "body", "boil", "bomb", "bone", "book", "border", "boss",
    "bottom", "bounce", "boy", "bracket", "bread", "brick", "broccoli", "brush", "bubble", "buddy",
    "buffalo", "build", "bulb", "bundle", "burden", "bus", "buyer", "buzz", "cabbage", "cactus",
    "cage", "cake", "call", "camera", "can", "capable", "car", "case", "cat", "caught", "ceiling",
    "celery", "cement", "census", "cereal", "chair", "cheap", "chicken", "choice", "chronic",
    "chuckle", "cigar", "cinnamon", "circle", "citizen", "claim", "clean", "click", "clock", "club",
    "coach", "coconut", "code", "coffee", "coil", "collect", "combine", "concert", "cook", "coral",
    "cost", "cotton", "couch", "cover", "coyote", "crack", "cream", "cricket", "crop", "crucial",
    "cry", "cube", "culture", "curious", "cushion", "cute", "cycle", "dad", "damage", "dance",
    "daring", "dash", "daughter", "dawn", "day", "deal", "debate", "deer", "defense", "degree",
    "delay", "demand", "denial", "depart", "derive", "describe", "detail", "develop", "diagram",
    "dice", "diesel", "digital", "dilemma", "dinner", "direct", "disagree", "divert", "dizzy",
    "doctor", "dog", "doll", "domain", "donate", "door", "dose", "double", "draft", "dream",
    "drift", "drop", "drum", "dry", "duck", "dumb", "dune", "during", "dust", "dutch", "dwarf",
    "dynamic", "early", "easily", "echo", "ecology", "edge", "edit", "educate", "effort", "egg",
    "eight", "either", "elbow", "elder", "electric", "else", "embark", "emerge", "emotion",
    "employ", "enable", "end", "enemy", "enforce", "engage", "enhance", "enjoy", "enlist", "enough",
    "ensure", "enter", "envelope", "episode", "equal", "era", "erode", "error", "erupt", "escape",
    "essay", "estate", "eternal", "ethics", "evidence", "exact", "excess", "execute", "exhaust",
    "exile", "exotic", "expand", "extend", "eye", "fabric", "face", "fade", "faint", "fall", "fan",
    "farm", "fashion", "fat", "fault", "favorite", "feature", "february", "federal", "fee",
    "female", "fence", "festival", "fetch", "few", "fiber", "fiction", "field", "figure", "file",
    "final", "fire", "fiscal", "fit", "fix", "flag", "flee", "flight", "fluid", "fly", "foam",
    "focus", "fog", "foil", "fold", "food", "force", "fossil", "found", "fox", "fragile",
    "frequent", "frog", "fruit", "fuel", "fun", "furnace", "future", "gadget", "gain", "galaxy",
    "game", "gap", "garage", "gas", "gate", "gauge", "general", "gesture", "ghost", "giant", "gift",
    "giggle", "ginger", "giraffe", "give", "glad", "glide", "globe", "glue", "goat", "gold", "good",
    "gorilla", "gospel", "govern", "gown", "grab", "great", "grid", "grocery", "grunt", "guard",
    "guess", "guide", "gym", "habit", "hair", "half", "hammer", "hand", "happy", "harbor", "hat",
    "have", "hawk", "hazard", "head", "hedgehog", "hello", "hen", "hero", "hidden", "high", "hill",
    "hint", "hip", "hire", "history", "hobby", "hockey", "hold", "home", "honey", "hope", "horn",
    "hospital", "hotel", "hour", "hover", "hub", "huge", "human", "hundred", "hurdle", "husband",
    "hybrid", "ice", "idea", "idle", "ignore", "ill", "image", "imitate", "immense", "impact",
    "inch", "index", "infant", "inhale", "initial", "inject", "inner", "input", "inquiry", "insane",
    "intact", "invest", "iron", "island", "isolate", "issue", "item", "ivory", "jacket", "jaguar",
    "jazz", "jealous", "jelly", "jewel", "job", "join", "joke", "journey", "joy", "judge", "juice",
    "jump", "jungle", "just", "keen", "ketchup", "key", "kick", "kid", "kind", "kiss", "kit",
    "kiwi", "knee", "knife", "knock", "lab", "ladder", "lake", "language", "laptop", "large",
    "later", "laugh", "lava", "law", "layer", "lazy", "leader", "lecture", "left", "leg", "leisure",
    "lend", "leopard", "lesson", "letter", "level", "liar", "liberty", "license", "life", "light",
    "like", "limb", "link", "lion", "list", "little", "live", "lizard", "load", "lobster", "local",
    "logic", "lonely", "loop", "lottery", "loud", "love", "loyal", "luggage", "lumber", "lunar",
    "luxury", "lyrics", "machine", "mad", "magic", "maid", "major", "make", "mammal", "man",
    "maple", "marble", "match", "maximum", "maze", "meadow", "mechanic", "medal", "melody",
    "member", "mention", "mercy", "mesh", "metal", "middle", "milk", "mind", "miracle", "misery",
    "mix", "mobile", "model", "mom", "monitor", "moon", "moral", "mosquito", "mother", "mountain",
    "move", "muffin", "mule", "muscle", "mutual", "myself", "myth", "naive", "name", "napkin",
    "narrow", "nasty", "nation", "near", "neck", "negative", "neither", "nephew", "nerve", "nest",
    "net", "neutral", "never", "news", "next", "nice", "night", "noble", "noise", "noodle",
    "normal", "nose", "notable", "novel", "now", "nuclear", "number", "nurse", "nut", "oak", "obey",
    "object", "oblige", "obscure", "obvious", "occur", "ocean", "october", "odor", "off", "often",
    "oil", "okay", "old", "olive", "olympic", "omit", "once", "onion", "online", "open", "opinion",
    "oppose", "option", "orange", "orbit", "orchard", "order", "organ", "orient", "orphan",
    "ostrich", "outdoor", "oval", "oven", "own", "oxygen", "oyster", "ozone", "pact", "paddle",
    "page", "pair", "palace", "panda", "paper", "pass", "patch", "pause", "pave", "payment",
    "peace", "pelican", "pen", "people", "pepper", "perfect", "pet", "phone", "phrase", "physical",
    "picnic", "piece", "pig", "pill", "pink", "pioneer", "pipe", "pistol", "pitch", "pizza",
    "place", "please", "pluck", "poem", "polar", "pond", "pool", "popular", "portion", "position",
    "potato", "poverty", "powder", "practice", "predict", "price", "problem", "public", "pull",
    "pumpkin", "punch", "pupil", "purchase", "push", "put", "puzzle", "pyramid", "quality",
    "question", "quick", "quote", "rabbit", "radar", "rail", "rally", "ramp", "ranch", "rapid",
    "rare", "rate", "raven", "raw", "razor", "ready", "rebel", "recall", "reflect", "region",
    "reject", "relax", "remain", "render", "reopen", "repair", "require", "rescue", "retire",
    "reunion", "reveal", "reward", "rhythm", "rice", "ride", "rifle", "right", "ring", "riot",
    "ripple", "risk", "ritual", "rival", "road", "robot", "rocket", "romance", "rose", "rotate",
    "rough", "royal", "rubber", "rude", "rug", "rule", "run", "rural", "sad", "safe", "sail",
    "salad", "sand", "satisfy", "sauce", "save", "say", "scale", "scene", "scheme", "science",
    "scorpion", "scrap", "sea", "second", "seed", "select", "seminar", "senior", "series",
    "session", "settle", "seven", "shadow", "shed", "shield", "shock", "shrimp", "shuffle", "shy",
    "sibling", "side", "siege", "sight", "silent", "similar", "since", "siren", "sister", "situate",
    "six", "size", "skate", "sketch", "ski", "slab", "sleep", "slice", "slogan", "slush", "small",
    "smile", "smoke", "snack", "sniff", "snow", "soap", "soccer", "soda", "solar", "someone",
    "song", "soon", "sorry", "soul", "space", "speak", "sphere", "spice", "split", "spoil", "spray",
    "spy", "stable", "steak", "stick", "stock", "strategy", "student", "style", "subject",
    "success", "sudden", "suffer", "sugar", "suit", "summer", "super", "sure", "suspect", "swallow",
    "swear", "swift", "sword", "symbol", "syrup", "system", "table", "tackle", "tag", "tail",
    "talent", "tape", "target", "task", "tattoo", "taxi", "teach", "tell", "ten", "term", "test",
    "text", "thank", "theme", "thing", "three", "thumb", "ticket", "tide", "tiger", "tilt",
    "timber", "tiny", "tip", "tired", "tissue", "title", "toast", "tobacco", "toe", "together",
    "toilet", "token", "tomato", "tone", "tool", "top", "torch", "toss", "total", "tourist",
    "toward", "toy", "treat", "trial", "trophy", "truck", "try", "tube", "tuition", "tumble",
    "tuna", "turkey", "twelve", "twice", "two", "type", "ugly", "unable", "uncle", "under",
    "unfair", "unhappy", "uniform", "unknown", "unlock", "until", "unusual", "unveil", "update",
    "upgrade", "uphold", "upper", "upset", "urban", "urge", "usage", "use", "usual", "utility",
    "vacant", "vague", "valid", "van", "vapor", "various", "vault", "vehicle", "velvet", "vendor",
    "verb", "vessel", "veteran", "viable", "vibrant", "vicious", "video", "view", "village",
    "vintage", "virtual", "visa", "vital", "vivid", "vocal", "voice", "volcano", "vote", "voyage",
    "wage", "wait", "walk", "want", "warfare", "water", "wave", "way", "wealth", "web", "wedding",
    "weekend", "weird", "welcome", "west", "wet", "whale", "wheat", "whip", "wide", "wild", "win",
    "wire", "wisdom", "witness", "wolf", "woman", "wonder", "wood", "word", "wrap", "wreck",
    "wrist", "wrong", "year", "yellow", "you", "zebra", "zero", "zone", "zoo",
];
