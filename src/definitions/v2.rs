//! Guild Wars 2 API v2 endpoints

use tracing::debug;

use crate::conditional::{ConditionalNode, Discriminator};
use crate::endpoint::{CachePolicy, Endpoint, QueryVariant, TokenScope};
use crate::error::Result;
use crate::field::Field;
use crate::registry::RegistryBuilder;
use crate::schema::{ArrayNode, Primitive, RecordNode, SchemaNode};
use crate::version::SchemaVersion;

const STRING: Primitive = Primitive::String;
const INTEGER: Primitive = Primitive::Integer;
const DECIMAL: Primitive = Primitive::Decimal;
const BOOLEAN: Primitive = Primitive::Boolean;

const BULK: [QueryVariant; 3] = [
    QueryVariant::ById,
    QueryVariant::ByIds { all: true },
    QueryVariant::ByPage,
];

const BULK_WITHOUT_ALL: [QueryVariant; 3] = [
    QueryVariant::ById,
    QueryVariant::ByIds { all: false },
    QueryVariant::ByPage,
];

/// Schema versions referenced by the definitions
struct Versions {
    v2019_02_21: SchemaVersion,
    v2019_05_22: SchemaVersion,
    v2019_12_19: SchemaVersion,
}

impl Versions {
    fn new() -> Result<Self> {
        Ok(Self {
            v2019_02_21: SchemaVersion::from_ymd(2019, 2, 21)?,
            v2019_05_22: SchemaVersion::from_ymd(2019, 5, 22)?,
            v2019_12_19: SchemaVersion::from_ymd(2019, 12, 19)?,
        })
    }
}

/// Register every v2 endpoint
pub fn register_all(builder: &mut RegistryBuilder) -> Result<()> {
    let versions = Versions::new()?;

    let endpoints = [
        account(&versions),
        account_achievements(),
        id_list(
            "/Account/DailyCrafting",
            "Returns which items that can be crafted once per day a player crafted since the most recent daily reset.",
            [TokenScope::Account, TokenScope::Progression, TokenScope::Unlocks],
            STRING,
        ),
        id_list(
            "/Account/Dungeons",
            "Returns which dungeons paths a player has completed since the most recent daily reset.",
            [TokenScope::Account, TokenScope::Progression],
            STRING,
        ),
        id_list(
            "/Account/Dyes",
            "Returns information about a player's unlocked dyes.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Emotes",
            "Returns information about a player's unlocked emotes.",
            [TokenScope::Account],
            INTEGER,
        ),
        id_list(
            "/Account/Finishers",
            "Returns information about a player's unlocked finishers.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Gliders",
            "Returns information about a player's unlocked gliders.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Home/Nodes",
            "Returns information about a player's unlocked home instance nodes.",
            [TokenScope::Account, TokenScope::Progression],
            STRING,
        ),
        account_inventory(),
        id_list(
            "/Account/Mailcarriers",
            "Returns information about a player's unlocked mail carriers.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/MapChests",
            "Returns which Hero's Choice Chests a player has acquired since the most recent daily reset.",
            [TokenScope::Account, TokenScope::Progression],
            STRING,
        ),
        account_masteries(),
        account_mastery_points(),
        account_materials(),
        id_list(
            "/Account/Minis",
            "Returns information about a player's unlocked miniatures.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Mounts/Skins",
            "Returns information about a player's unlocked mount skins.",
            [TokenScope::Account, TokenScope::Unlocks],
            STRING,
        ),
        id_list(
            "/Account/Mounts/Types",
            "Returns information about a player's unlocked mounts.",
            [TokenScope::Account, TokenScope::Unlocks],
            STRING,
        ),
        id_list(
            "/Account/Novelties",
            "Returns information about a player's unlocked novelties.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Outfits",
            "Returns information about a player's unlocked outfits.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/PvP/Heroes",
            "Returns information about a player's unlocked PvP heroes.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Raids",
            "Returns which raid encounter a player has cleared since the most recent raid reset.",
            [TokenScope::Account, TokenScope::Progression],
            STRING,
        ),
        id_list(
            "/Account/Recipes",
            "Returns information about a player's unlocked recipes.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Skins",
            "Returns information about a player's unlocked skins.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        id_list(
            "/Account/Titles",
            "Returns information about a player's unlocked titles.",
            [TokenScope::Account, TokenScope::Unlocks],
            INTEGER,
        ),
        account_wallet(),
        id_list(
            "/Account/WorldBosses",
            "Returns which world bosses that can be looted once per day a player has defeated since the most recent daily reset.",
            [TokenScope::Account, TokenScope::Progression],
            STRING,
        ),
        build(),
        character_inventory()?,
        colors(),
        commerce_delivery(),
        commerce_exchange(),
        commerce_exchange_type(),
        commerce_listings(),
        commerce_prices(),
        commerce_transactions(),
        commerce_transactions_relevance(),
        commerce_transactions_type(),
        currencies(),
        id_catalogue(
            "/DailyCrafting",
            "Returns information about the items that can be crafted once per day.",
            "Information about an item that can be crafted once per day.",
            id(INTEGER, "the ID of the dailycrafting"),
        ),
        emotes(),
        files(),
        items(),
        item_stats_catalogue(),
        legends(),
        id_catalogue(
            "/MapChests",
            "Returns information about the Hero's Choice Chests that can be acquired once per day.",
            "Information about a Hero's Choice Chest that can be acquired once per day.",
            id(INTEGER, "the ID of the mapchest"),
        ),
        outfits(),
        professions(&versions),
        races(),
        titles(),
        traits(),
        token_info(&versions),
        id_catalogue(
            "/WorldBosses",
            "Returns information about the worldbosses that reward boss chests that can be opened once a day.",
            "Information about a worldboss that rewards boss chests that can be opened once a day.",
            id(STRING, "the worldboss's ID"),
        ),
        worlds(),
        wvw_objectives(),
        wvw_ranks(),
        wvw_upgrades(),
    ];

    for endpoint in endpoints {
        builder.register(endpoint)?;
    }
    debug!(endpoints = builder.len(), "registered v2 definitions");

    Ok(())
}

fn id(ty: Primitive, description: &str) -> Field {
    Field::new("ID", ty, description).camel_case("id")
}

/// An account-bound list of IDs, e.g. unlocked skins
fn id_list(path: &str, summary: &str, security: impl IntoIterator<Item = TokenScope>, ty: Primitive) -> Endpoint {
    Endpoint::new(path)
        .summary(summary)
        .security(security)
        .schema(SchemaNode::array(ty))
}

/// A bulk-queryable catalogue whose entries only carry an ID
fn id_catalogue(path: &str, summary: &str, description: &str, id: Field) -> Endpoint {
    Endpoint::new(path)
        .summary(summary)
        .cache(CachePolicy::hours(1))
        .queries(BULK)
        .schema(RecordNode::new(description).field(id))
}

fn account(versions: &Versions) -> Endpoint {
    Endpoint::new("/Account")
        .summary("Returns information about a player's account.")
        .security([TokenScope::Account])
        .schema(
            RecordNode::new("Information about a player's account.")
                .field(id(STRING, "the unique persistent account GUID"))
                .field(Field::new("Age", INTEGER, "the age of the account in seconds"))
                .field(Field::new("Name", STRING, "the unique account name"))
                .field(Field::new("World", INTEGER, "the ID of the home world the account is assigned to"))
                .field(Field::new(
                    "Guilds",
                    SchemaNode::array(STRING),
                    "an array containing the IDs of all guilds the account is a member in",
                ))
                .field(
                    Field::new(
                        "GuildLeader",
                        SchemaNode::array(STRING),
                        "an array containing the IDs of all guilds the account is a leader of",
                    )
                    .serial_name("guild_leader")
                    .optional(),
                )
                .field(Field::new(
                    "Created",
                    STRING,
                    "the ISO-8601 standard timestamp of when the account was created",
                ))
                .field(Field::new(
                    "Access",
                    SchemaNode::array(STRING),
                    "an array of what content this account has access to",
                ))
                .field(Field::new(
                    "Commander",
                    BOOLEAN,
                    "a flag indicating whether or not the commander tag is unlocked for the account",
                ))
                .field(
                    Field::new("FractalLevel", INTEGER, "the account's personal fractal level")
                        .serial_name("fractal_level")
                        .optional(),
                )
                .field(
                    Field::new("DailyAP", INTEGER, "the daily AP the account has")
                        .serial_name("daily_ap")
                        .optional(),
                )
                .field(
                    Field::new("MonthlyAP", INTEGER, "the monthly AP the account has")
                        .serial_name("monthly_ap")
                        .optional(),
                )
                .field(
                    Field::new("WvWRank", INTEGER, "the account's personal wvw rank")
                        .camel_case("wvwRank")
                        .serial_name("wvw_rank")
                        .optional(),
                )
                .field(
                    Field::new(
                        "LastModified",
                        STRING,
                        "the ISO-8601 standard timestamp of when the account information last changed",
                    )
                    .serial_name("last_modified")
                    .since(versions.v2019_02_21),
                ),
        )
}

fn account_achievements() -> Endpoint {
    Endpoint::new("/Account/Achievements")
        .summary("Returns a player's progress towards all their achievements.")
        .security([TokenScope::Account, TokenScope::Progression])
        .schema(SchemaNode::array(
            RecordNode::new("Information about a player's progress towards an achievement.")
                .field(id(INTEGER, "the achievement's ID"))
                .field(Field::new(
                    "Done",
                    BOOLEAN,
                    "a flag indicating whether or not the account has completed the achievement",
                ))
                .field(Field::new("Bits", SchemaNode::array(INTEGER), "progress information towards the achievement").optional())
                .field(Field::new("Current", INTEGER, "the account's current progress towards the achievement").optional())
                .field(Field::new("Max", INTEGER, "the amount of progress required to complete the achievement").optional())
                .field(Field::new("Repeated", INTEGER, "the number of times the achievement has been completed").optional())
                .field(Field::new("Unlocked", BOOLEAN, "whether or not the achievement is unlocked").optional()),
        ))
}

fn account_inventory() -> Endpoint {
    Endpoint::new("/Account/Inventory")
        .summary("Returns information about a player's shared inventory slots.")
        .security([TokenScope::Account, TokenScope::Inventories])
        .schema(SchemaNode::array(inventory_slot(
            "Information about a stack of items in a player's shared inventory.",
        )))
}

fn account_masteries() -> Endpoint {
    Endpoint::new("/Account/Masteries")
        .summary("Returns information about a player's unlocked masteries.")
        .security([TokenScope::Account, TokenScope::Progression])
        .schema(SchemaNode::array(
            RecordNode::new("Information about a player's unlocked mastery.")
                .field(id(INTEGER, "the mastery's ID"))
                .field(Field::new("Level", INTEGER, "the index of the unlocked mastery level").optional()),
        ))
}

fn account_mastery_points() -> Endpoint {
    Endpoint::new("/Account/Mastery/Points")
        .summary("Returns information about a player's unlocked mastery points.")
        .security([TokenScope::Account, TokenScope::Progression])
        .schema(
            RecordNode::new("Information about a player's unlocked mastery points for a region.")
                .field(Field::new(
                    "Totals",
                    SchemaNode::array(
                        RecordNode::new("Information about the mastery points for a region.")
                            .field(Field::new("Region", STRING, "the mastery region"))
                            .field(Field::new(
                                "Spent",
                                INTEGER,
                                "the amount of mastery points of this region spent in mastery tracks",
                            ))
                            .field(Field::new(
                                "Earned",
                                INTEGER,
                                "the amount of mastery points of this region earned for the account",
                            )),
                    ),
                    "information about the total mastery points for a region",
                ))
                .field(Field::new("Unlocked", SchemaNode::array(INTEGER), "the list of IDs of unlocked mastery points")),
        )
}

fn account_materials() -> Endpoint {
    Endpoint::new("/Account/Materials")
        .summary("Returns information about the materials stored in a player's vault.")
        .security([TokenScope::Account, TokenScope::Inventories])
        .schema(SchemaNode::array(
            RecordNode::new("Information about a stack of materials in a player's vault.")
                .field(id(INTEGER, "the material's item ID"))
                .field(Field::new("Category", INTEGER, "the material category the item belongs to"))
                .field(Field::new("Count", INTEGER, "the number of the material that is stored in the player's vault"))
                .field(Field::new("Binding", STRING, "the binding of the material").optional()),
        ))
}

fn account_wallet() -> Endpoint {
    Endpoint::new("/Account/Wallet")
        .summary("Returns information about a player's wallet.")
        .security([TokenScope::Account, TokenScope::Wallet])
        .schema(SchemaNode::array(
            RecordNode::new("Information about a currency in a player's wallet.")
                .field(id(INTEGER, "the currency ID that can be resolved against /v2/currencies"))
                .field(Field::new("Value", INTEGER, "the amount of this currency in the player's wallet")),
        ))
}

fn build() -> Endpoint {
    Endpoint::new("/Build")
        .summary("Returns the current build ID.")
        .schema(RecordNode::new("Information about the current game build.").field(id(INTEGER, "the current build ID")))
}

fn item_stats(description: &str) -> Field {
    let stat = |name: &str, what: &str| {
        Field::new(name, INTEGER, format!("the amount of {what} given by the item"))
            .serial_name(name)
            .optional()
    };

    Field::new(
        "Stats",
        RecordNode::new("Information about an item's stats.")
            .field(id(INTEGER, "the itemstat ID"))
            .field(stat("Power", "power"))
            .field(stat("Precision", "precision"))
            .field(stat("Toughness", "toughness"))
            .field(stat("Vitality", "vitality"))
            .field(stat("ConditionDamage", "condition damage"))
            .field(stat("ConditionDuration", "condition duration"))
            .field(stat("Healing", "healing"))
            .field(stat("BoonDuration", "boon duration")),
        description,
    )
    .optional()
}

/// A stack of items in an inventory; `BoundTo` only exists on characters
fn inventory_slot(description: &str) -> RecordNode {
    RecordNode::new(description)
        .field(id(INTEGER, "the item's ID"))
        .field(Field::new("Count", INTEGER, "the amount of items in the stack"))
        .field(Field::new("Charges", INTEGER, "the amount of charges remaining on the item").optional())
        .field(Field::new("Skin", INTEGER, "the ID of the skin applied to the item").optional())
        .field(
            Field::new(
                "Upgrades",
                SchemaNode::array(INTEGER),
                "an array of item IDs for each rune or signet applied to the item",
            )
            .optional(),
        )
        .field(
            Field::new(
                "Infusions",
                SchemaNode::array(INTEGER),
                "an array of item IDs for each infusion applied to the item",
            )
            .optional(),
        )
        .field(item_stats("the stats chosen if the item offers an option for stats/prefix"))
        .field(Field::new("Binding", STRING, "the binding of the item").optional())
}

fn character_inventory() -> Result<Endpoint> {
    let slot = inventory_slot("Information about an item in a character's inventory.").field(
        Field::new("BoundTo", STRING, "name of the character the item is bound to")
            .serial_name("bound_to")
            .optional(),
    );

    // Empty inventory slots are null
    let slots = ArrayNode::builder().items(slot).nullable_items(true).build()?;

    Ok(Endpoint::new("/Characters/:ID/Inventory")
        .summary("Returns information about a character's inventory.")
        .security([TokenScope::Account, TokenScope::Characters, TokenScope::Inventories])
        .path_parameter("ID", STRING, "the character's ID")
        .schema(
            RecordNode::new("Information about a character's inventory.").field(Field::new(
                "Bags",
                SchemaNode::array(
                    RecordNode::new("Information about an inventory bag.")
                        .field(id(INTEGER, "the bag's item ID"))
                        .field(Field::new("Size", INTEGER, "the bag's size"))
                        .field(Field::new("Inventory", slots, "the bag's content")),
                ),
                "the character's inventory bags",
            )),
        ))
}

fn color_appearance(description: &str) -> RecordNode {
    RecordNode::new(description)
        .field(Field::new("Brightness", INTEGER, "the brightness"))
        .field(Field::new("Contrast", DECIMAL, "the contrast"))
        .field(Field::new("Hue", INTEGER, "the hue in HSL colorspace"))
        .field(Field::new("Saturation", DECIMAL, "the saturation in HSL colorspace"))
        .field(Field::new("Lightness", DECIMAL, "the lightness in HSL colorspace"))
        .field(Field::new("RGB", SchemaNode::array(INTEGER), "a list containing precalculated RGB values"))
}

fn colors() -> Endpoint {
    let appearance = |material: &str| {
        Field::new(
            material,
            color_appearance("Information about the appearance of the color."),
            format!(
                "detailed information on its appearance when applied on {} armor",
                material.to_lowercase()
            ),
        )
    };

    Endpoint::new("/Colors")
        .summary("Returns information about all dye colors in the game.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a dye color.")
                .field(id(INTEGER, "the color's ID"))
                .field(Field::new("Name", STRING, "the color's name"))
                .field(Field::new("BaseRGB", SchemaNode::array(INTEGER), "the base RGB values").serial_name("base_rgb"))
                .field(appearance("Cloth"))
                .field(appearance("Leather"))
                .field(appearance("Metal"))
                .field(appearance("Fur").optional())
                .field(Field::new("Item", INTEGER, "the ID of the dye item"))
                .field(Field::new("Categories", SchemaNode::array(STRING), "the categories of the color")),
        )
}

fn commerce_delivery() -> Endpoint {
    Endpoint::new("/Commerce/Delivery")
        .summary("Returns information about the items and coins currently available for pickup.")
        .security([TokenScope::Account, TokenScope::Tradingpost])
        .schema(
            RecordNode::new("Information about the items and coins currently available for pickup.")
                .field(Field::new("Coins", INTEGER, "the amount of coins ready for pickup"))
                .field(Field::new(
                    "Items",
                    SchemaNode::array(
                        RecordNode::new("Information about an item ready for pickup.")
                            .field(id(INTEGER, "the item's ID"))
                            .field(Field::new("Count", INTEGER, "the amount of this item ready for pickup")),
                    ),
                    "the items ready for pickup",
                )),
        )
}

fn commerce_exchange() -> Endpoint {
    Endpoint::new("/Commerce/Exchange")
        .summary("Returns information about the gem exchange.")
        .cache(CachePolicy::Forever)
        .schema(SchemaNode::array(STRING))
}

fn commerce_exchange_type() -> Endpoint {
    Endpoint::new("/Commerce/Exchange/:Type")
        .summary("Returns information about the gem exchange.")
        .cache(CachePolicy::minutes(5))
        .path_parameter("Type", STRING, "the exchange type")
        .query_parameter("Quantity", INTEGER, "the amount to exchange")
        .schema(
            RecordNode::new("Information about an exchange.")
                .field(Field::new("CoinsPerGem", INTEGER, "the number of coins received/required for a single gem").serial_name("coins_per_gem"))
                .field(Field::new("Quantity", INTEGER, "the number of coins/gems received for the specified quantity")),
        )
}

fn commerce_listings() -> Endpoint {
    let listing = || {
        RecordNode::new("Information about an item's listing.")
            .field(Field::new("Listings", INTEGER, "the number of individual listings this object refers to"))
            .field(Field::new("UnitPrice", INTEGER, "the sell offer or buy order price in coins").serial_name("unit_price"))
            .field(Field::new("Quantity", INTEGER, "the amount of items being sold/bought in this listing"))
    };

    Endpoint::new("/Commerce/Listings")
        .summary("Returns current buy and sell listings from the trading post.")
        .queries(BULK_WITHOUT_ALL)
        .schema(
            RecordNode::new("Information about an item listed in the trading post.")
                .field(id(INTEGER, "the item's ID"))
                .field(Field::new("Buys", SchemaNode::array(listing()), "list of all buy listings"))
                .field(Field::new("Sells", SchemaNode::array(listing()), "list of all sell listings")),
        )
}

fn commerce_prices() -> Endpoint {
    let price = |description: &str, what: &str, amount: &str| {
        RecordNode::new(description)
            .field(Field::new("UnitPrice", INTEGER, what).serial_name("unit_price"))
            .field(Field::new("Quantity", INTEGER, amount))
    };

    Endpoint::new("/Commerce/Prices")
        .summary("Returns current aggregated buy and sell listing information from the trading post.")
        .queries(BULK_WITHOUT_ALL)
        .schema(
            RecordNode::new("Information about an item listed in the trading post.")
                .field(id(INTEGER, "the item's ID"))
                .field(Field::new(
                    "Whitelisted",
                    BOOLEAN,
                    "indicates whether or not a free to play account can purchase or sell this item on the trading post",
                ))
                .field(Field::new(
                    "Buys",
                    price(
                        "Information about an item's buy listing.",
                        "the highest buy order price in coins",
                        "the amount of items being bought",
                    ),
                    "the buy information",
                ))
                .field(Field::new(
                    "Sells",
                    price(
                        "Information about an item's sell listing.",
                        "the lowest sell order price in coins",
                        "the amount of items being sold",
                    ),
                    "the sell information",
                )),
        )
}

fn commerce_transactions() -> Endpoint {
    Endpoint::new("/Commerce/Transactions")
        .summary("Returns information about an account's transactions.")
        .cache(CachePolicy::Forever)
        .security([TokenScope::Account, TokenScope::Tradingpost])
        .schema(SchemaNode::array(STRING))
}

fn commerce_transactions_relevance() -> Endpoint {
    Endpoint::new("/Commerce/Transactions/:Relevance")
        .summary("Returns information about an account's transactions.")
        .cache(CachePolicy::Forever)
        .security([TokenScope::Account, TokenScope::Tradingpost])
        .path_parameter("Relevance", STRING, "the temporal relevance")
        .schema(SchemaNode::array(STRING))
}

fn commerce_transactions_type() -> Endpoint {
    Endpoint::new("/Commerce/Transactions/:Relevance/:Type")
        .summary("Returns information about an account's transactions.")
        .cache(CachePolicy::minutes(5))
        .security([TokenScope::Account, TokenScope::Tradingpost])
        .path_parameter("Relevance", STRING, "the temporal relevance")
        .path_parameter("Type", STRING, "the transaction type")
        .queries([QueryVariant::ByPage])
        .schema(
            RecordNode::new("Information about a transaction.")
                .field(id(INTEGER, "the transaction's ID"))
                .field(Field::new("ItemID", INTEGER, "the item's ID").serial_name("item_id"))
                .field(Field::new("Price", INTEGER, "the price in coins"))
                .field(Field::new("Quantity", INTEGER, "the quantity of the item"))
                .field(Field::new("Created", STRING, "the ISO-8601 standard timestamp of when the transaction was created"))
                .field(
                    Field::new("Purchased", STRING, "the ISO-8601 standard timestamp of when the transaction was completed")
                        .optional(),
                ),
        )
}

fn currencies() -> Endpoint {
    Endpoint::new("/Currencies")
        .summary("Returns information about currencies contained in the account wallet.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a currency.")
                .field(id(INTEGER, "the currency's ID"))
                .field(Field::new("Name", STRING, "the currency's name"))
                .field(Field::new("Description", STRING, "a description of the currency"))
                .field(Field::new("Icon", STRING, "the currency's icon"))
                .field(Field::new("Order", INTEGER, "a number that can be used to sort the list of currencies")),
        )
}

fn emotes() -> Endpoint {
    Endpoint::new("/Emotes")
        .summary("Returns information about unlockable emotes.")
        .cache(CachePolicy::hours(1))
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an unlockable emote.")
                .field(id(STRING, "the emote's ID"))
                .field(Field::new(
                    "Commands",
                    SchemaNode::array(INTEGER),
                    "the commands that may be used to trigger the emote",
                ))
                .field(
                    Field::new("UnlockItems", SchemaNode::array(INTEGER), "the IDs of the items that unlock the emote")
                        .serial_name("unlock_items"),
                ),
        )
}

fn files() -> Endpoint {
    Endpoint::new("/Files")
        .summary("Returns commonly requested in-game assets.")
        .cache(CachePolicy::hours(1))
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an in-game asset.")
                .field(id(STRING, "the file identifier"))
                .field(Field::new("Icon", STRING, "the URL to the image")),
        )
}

fn infix_upgrade() -> Field {
    Field::new(
        "InfixUpgrade",
        RecordNode::new("Information about an item's infix upgrade.")
            .field(id(INTEGER, "the itemstat ID"))
            .field(Field::new(
                "Attributes",
                SchemaNode::array(
                    RecordNode::new("Information about an infix upgrade's attribute bonuses.")
                        .field(Field::new("Attribute", STRING, "the attribute this bonus applies to"))
                        .field(Field::new("Modifier", INTEGER, "the modifier value")),
                ),
                "the list of attribute bonuses granted by this item",
            ))
            .field(
                Field::new(
                    "Buff",
                    RecordNode::new("Information about an infix upgrade's buffs.")
                        .field(Field::new("SkillID", INTEGER, "the skill ID of the effect").serial_name("skill_id"))
                        .field(Field::new("Description", STRING, "the effect's description").optional()),
                    "object containing an additional effect",
                )
                .optional(),
            ),
        "infix upgrade object",
    )
    .serial_name("infix_upgrade")
    .optional()
}

fn infusion_slots(description: &str) -> Field {
    Field::new(
        "InfusionSlots",
        SchemaNode::array(
            RecordNode::new("Information about an items infusion slot.")
                .field(Field::new("Flags", SchemaNode::array(STRING), "infusion slot type of infusion upgrades"))
                .field(
                    Field::new("ItemID", INTEGER, "the infusion upgrade in the armor piece")
                        .serial_name("item_id")
                        .optional(),
                ),
        ),
        description,
    )
    .serial_name("infusion_slots")
}

/// Upgrade-related fields shared by equipment details
fn equipment_upgrades(record: RecordNode) -> RecordNode {
    record
        .field(infix_upgrade())
        .field(Field::new("SuffixItemID", INTEGER, "the suffix item ID").serial_name("suffix_item_id").optional())
        .field(
            Field::new("SecondarySuffixItemID", STRING, "the secondary suffix item ID")
                .serial_name("secondary_suffix_item_id")
                .optional(),
        )
        .field(
            Field::new("StatChoices", SchemaNode::array(INTEGER), "a list of selectable stat IDs")
                .serial_name("stat_choices")
                .optional(),
        )
        .field(
            Field::new("AttributeAdjustment", DECIMAL, "the attribute adjustment")
                .serial_name("attribute_adjustment")
                .optional(),
        )
}

fn item_details() -> ConditionalNode {
    let typed = |description: &str, what: &str| {
        RecordNode::new(description).field(Field::new("Type", STRING, what))
    };

    ConditionalNode::new("Additional information about an item.", Discriminator::sibling())
        .with_variant(
            "Armor",
            equipment_upgrades(
                typed("Additional information about an armor item.", "the armor slot type")
                    .field(Field::new("WeightClass", STRING, "the weight class").serial_name("weight_class"))
                    .field(Field::new("Defense", INTEGER, "the defense value of the armor piece"))
                    .field(infusion_slots("infusion slots of the armor piece")),
            ),
        )
        .with_variant(
            "Back",
            equipment_upgrades(
                RecordNode::new("Additional information about a backpiece.")
                    .field(infusion_slots("infusion slots of the back item")),
            ),
        )
        .with_variant(
            "Bag",
            RecordNode::new("Additional information about a bag.")
                .field(Field::new("Size", INTEGER, "the number of bag slots"))
                .field(Field::new("NoSellOrSort", BOOLEAN, "whether the bag is invisible").serial_name("no_sell_or_sort")),
        )
        .with_variant(
            "Consumable",
            typed("Additional information about a consumable item.", "the consumable type")
                .field(Field::new("Description", STRING, "effect description for consumables applying an effect").optional())
                .field(Field::new("DurationMs", INTEGER, "effect duration in milliseconds").serial_name("duration_ms").optional())
                .field(Field::new("UnlockType", STRING, "unlock type for unlock consumables").serial_name("unlock_type").optional())
                .field(Field::new("ColorID", INTEGER, "the dye ID for dye unlocks").serial_name("color_id").optional())
                .field(Field::new("RecipeID", INTEGER, "the recipe ID for recipe unlocks").serial_name("recipe_id").optional())
                .field(Field::new("Name", STRING, "the effect type name of the consumable").optional())
                .field(Field::new("Icon", STRING, "the icon of the effect").optional())
                .field(Field::new("Skins", SchemaNode::array(INTEGER), "a list of skin ids which this item unlocks").optional()),
        )
        .with_variant("Container", typed("Additional information about a container.", "the container type"))
        .with_variant("Gathering", typed("Additional information about a gathering tool.", "the tool type"))
        .with_variant(
            "Gizmo",
            typed("Additional information about a gizmo.", "the gizmo type")
                .field(Field::new("GuildUpgradeID", INTEGER, "the guild upgrade ID for the item").serial_name("guild_upgrade_id").optional())
                .field(Field::new("VendorIDs", SchemaNode::array(INTEGER), "the vendor IDs").serial_name("vendor_ids").optional()),
        )
        .with_variant(
            "MiniPet",
            RecordNode::new("Additional information about a mini unlock item.")
                .field(Field::new("MinipetID", INTEGER, "the miniature it unlocks").serial_name("minipet_id")),
        )
        .with_variant(
            "Tool",
            typed("Additional information about a tool.", "the tool type")
                .field(Field::new("Charges", INTEGER, "the available charges")),
        )
        .with_variant(
            "Trinket",
            equipment_upgrades(
                typed("Additional information about a trinket.", "the trinket type")
                    .field(infusion_slots("infusion slots of the trinket")),
            ),
        )
        .with_variant(
            "UpgradeComponent",
            typed("Additional information about an upgrade component.", "the type of the upgrade component")
                .field(Field::new("Flags", SchemaNode::array(STRING), "the items that can be upgraded with the upgrade component"))
                .field(
                    Field::new("InfusionUpgradeFlags", SchemaNode::array(STRING), "applicable infusion slot for infusion upgrades")
                        .serial_name("infusion_upgrade_flags"),
                )
                .field(Field::new("Suffix", STRING, "the suffix appended to the item name when the component is applied"))
                .field(infix_upgrade())
                .field(Field::new("Bonuses", SchemaNode::array(STRING), "the bonuses from runes").optional()),
        )
        .with_variant(
            "Weapon",
            equipment_upgrades(
                typed("Additional information about a weapon.", "the weapon type")
                    .field(Field::new("MinPower", INTEGER, "minimum weapon strength").serial_name("min_power"))
                    .field(Field::new("MaxPower", INTEGER, "maximum weapon strength").serial_name("max_power"))
                    .field(Field::new("DamageType", STRING, "the damage type").serial_name("damage_type"))
                    .field(Field::new("Defense", INTEGER, "the defense value of the weapon"))
                    .field(infusion_slots("infusion slots of the weapon")),
            ),
        )
}

fn items() -> Endpoint {
    let upgrade = |description: &str| {
        SchemaNode::array(
            RecordNode::new(description)
                .field(Field::new("Upgrade", STRING, "describes the method of upgrading"))
                .field(Field::new("ItemID", INTEGER, "the item ID that results from performing the upgrade").serial_name("item_id")),
        )
    };

    Endpoint::new("/Items")
        .summary("Returns information about items in the game.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK_WITHOUT_ALL)
        .schema(
            RecordNode::new("Information about an item.")
                .field(id(INTEGER, "the item's ID"))
                .field(Field::new("Name", STRING, "the item's name"))
                .field(Field::new("Type", STRING, "the item's type"))
                .field(Field::new("ChatLink", STRING, "the chat link").serial_name("chat_link"))
                .field(Field::new("Icon", STRING, "the URL for the item's icon").optional())
                .field(Field::new("Description", STRING, "the item's description").optional())
                .field(Field::new("Rarity", STRING, "the item's rarity"))
                .field(Field::new("Level", INTEGER, "the level required to use the item"))
                .field(Field::new("VendorValue", INTEGER, "the value in coins when selling the item to a vendor").serial_name("vendor_value"))
                .field(Field::new("DefaultSkin", INTEGER, "the ID of the item's default skin").serial_name("default_skin").optional())
                .field(Field::new("Flags", SchemaNode::array(STRING), "flags applying to the item"))
                .field(Field::new("GameTypes", SchemaNode::array(STRING), "the game types in which the item is usable").serial_name("game_types"))
                .field(Field::new("Restrictions", SchemaNode::array(STRING), "restrictions applied to the item"))
                .field(
                    Field::new(
                        "UpgradesInto",
                        upgrade("Information about an item's upgrade."),
                        "lists what items this item can be upgraded into",
                    )
                    .serial_name("upgrades_into")
                    .optional(),
                )
                .field(
                    Field::new(
                        "UpgradesFrom",
                        upgrade("Information about an item's precursor."),
                        "lists what items this item can be upgraded from",
                    )
                    .serial_name("upgrades_from")
                    .optional(),
                )
                .field(Field::new("Details", item_details(), "additional information about the item").optional()),
        )
}

fn item_stats_catalogue() -> Endpoint {
    Endpoint::new("/ItemStats")
        .summary("Returns information about itemstats.")
        .cache(CachePolicy::hours(1))
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a stat set.")
                .field(id(INTEGER, "the stat set's ID"))
                .field(Field::new("Name", STRING, "the name of the stat set"))
                .field(Field::new(
                    "Attributes",
                    SchemaNode::array(
                        RecordNode::new("Information about an attribute bonus.")
                            .field(Field::new("Attribute", STRING, "the name of the attribute"))
                            .field(Field::new("Multiplier", DECIMAL, "the multiplier for that attribute"))
                            .field(Field::new("Value", INTEGER, "the default value for that attribute")),
                    ),
                    "the list of attribute bonuses",
                )),
        )
}

fn legends() -> Endpoint {
    Endpoint::new("/Legends")
        .summary("Returns information about the Revenant legends.")
        .cache(CachePolicy::hours(1))
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a Revenant legend.")
                .field(id(STRING, "the legend's ID"))
                .field(Field::new("Swap", INTEGER, "the ID of the profession (swap Legend) skill"))
                .field(Field::new("Heal", INTEGER, "the ID of the heal skill"))
                .field(Field::new("Elite", INTEGER, "the ID of the elite skills"))
                .field(Field::new("Utilities", SchemaNode::array(INTEGER), "the IDs of the utility skills")),
        )
}

fn outfits() -> Endpoint {
    Endpoint::new("/Outfits")
        .summary("Returns information about outfits.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an outfit.")
                .field(id(INTEGER, "the outfit's ID"))
                .field(Field::new("Name", STRING, "the outfit's name"))
                .field(Field::new("Icon", STRING, "the outfit's icon"))
                .field(
                    Field::new("UnlockItems", SchemaNode::array(INTEGER), "the IDs of the items that unlock the outfit")
                        .serial_name("unlock_items"),
                ),
        )
}

fn professions(versions: &Versions) -> Endpoint {
    let weapon = RecordNode::new("Information about a profession's weapon and it's skills.")
        .field(Field::new("Specialization", INTEGER, "the ID of the profession's specializations required for this weapon").optional())
        .field(Field::new("Flags", SchemaNode::array(STRING), "additional flags describing this weapon's properties"))
        .field(Field::new(
            "Skills",
            SchemaNode::array(
                RecordNode::new("Information about a weapon's skills.")
                    .field(id(INTEGER, "the skill's ID"))
                    .field(Field::new("Slot", STRING, "the skill's slot"))
                    .field(Field::new("Attunement", STRING, "the elementalist attunement for this skill").optional())
                    .field(Field::new("Offhand", STRING, "the offhand weapon for this skill").optional()),
            ),
            "the skills for the weapon if wielded by this profession",
        ));

    Endpoint::new("/Professions")
        .summary("Returns information about the game's playable professions.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a playable profession.")
                .field(id(STRING, "the profession's ID"))
                .field(Field::new("Name", STRING, "the profession's localized name"))
                .field(Field::new("Code", INTEGER, "the profession's palette code").since(versions.v2019_12_19))
                .field(Field::new("Icon", STRING, "a render service URL for the profession's icon"))
                .field(Field::new("BigIcon", STRING, "a render service URL for a big version of the profession's icon").serial_name("icon_big"))
                .field(Field::new("Specializations", SchemaNode::array(INTEGER), "the IDs of the profession's specializations"))
                .field(Field::new(
                    "Weapons",
                    SchemaNode::map(STRING, weapon),
                    "information about the weapons usable by this profession",
                ))
                .field(Field::new("Flags", SchemaNode::array(STRING), "additional flags describing this profession's properties"))
                .field(Field::new(
                    "Skills",
                    SchemaNode::array(
                        RecordNode::new("Information about a profession skill.")
                            .field(id(INTEGER, "the skill's ID"))
                            .field(Field::new("Slot", STRING, "the skill's slot"))
                            .field(Field::new("Type", STRING, "the skill's type"))
                            .field(Field::new("Attunement", STRING, "the elementalist attunement for this skill").optional())
                            .field(Field::new("Source", STRING, "the profession ID of the source of the stolen skill").optional()),
                    ),
                    "the profession specific skills",
                ))
                .field(
                    Field::new(
                        "SkillsByPalette",
                        SchemaNode::array(SchemaNode::array(INTEGER)),
                        "mappings from palette IDs to skill IDs",
                    )
                    .serial_name("skills_by_palette")
                    .since(versions.v2019_12_19),
                ),
        )
}

fn races() -> Endpoint {
    Endpoint::new("/Races")
        .summary("Returns information about the game's playable races.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a playable race.")
                .field(id(STRING, "the race's ID"))
                .field(Field::new("Name", STRING, "the race's localized name"))
                .field(Field::new("Skills", SchemaNode::array(INTEGER), "an array of racial skill IDs")),
        )
}

fn titles() -> Endpoint {
    Endpoint::new("/Titles")
        .summary("Returns information about the titles that are in the game.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a title.")
                .field(id(INTEGER, "the ID of the title"))
                .field(Field::new("Name", STRING, "the display name of the title"))
                .field(Field::new("Achievement", INTEGER, "the ID of the achievement that grants this title").deprecated().optional())
                .field(Field::new("Achievements", SchemaNode::array(INTEGER), "the IDs of the achievements that grant this title").optional())
                .field(
                    Field::new("APRequired", INTEGER, "the amount of AP required to unlock this title")
                        .serial_name("ap_required")
                        .camel_case("apRequired")
                        .optional(),
                ),
        )
}

fn trait_facts(description: &str, traited: bool) -> ConditionalNode {
    let buff = |description: &str| {
        RecordNode::new(description)
            .field(Field::new("Status", STRING, "the boon, condition, or effect referred to by the fact"))
            .field(Field::new("Duration", INTEGER, "the duration of the effect in seconds").optional())
            .field(Field::new("Description", STRING, "the description of the status effect").optional())
            .field(Field::new("ApplyCount", INTEGER, "the number of stacks applied").serial_name("apply_count").optional())
    };
    let value = |description: &str, ty: Primitive, what: &str| {
        RecordNode::new(description).field(Field::new("Value", ty, what))
    };

    let mut facts = ConditionalNode::new(description, Discriminator::child())
        .shared_field(Field::new("Type", STRING, "the type of the fact"))
        .shared_field(Field::new("Icon", STRING, "the URL for the fact's icon").optional())
        .shared_field(Field::new("Text", STRING, "an arbitrary localized string describing the fact").optional());
    if traited {
        facts = facts
            .shared_field(
                Field::new("RequiresTrait", INTEGER, "specifies which trait has to be selected for this fact to take effect")
                    .serial_name("requires_trait"),
            )
            .shared_field(Field::new("Overrides", INTEGER, "the array index of the facts object it will override").optional());
    }

    facts
        .with_variant(
            "AttributeAdjust",
            RecordNode::new("Additional information about an attribute adjustment.")
                .field(Field::new("Value", INTEGER, "the amount 'target' gets adjusted").optional())
                .field(Field::new("Target", STRING, "the attribute this fact adjusts").optional()),
        )
        .with_variant("Buff", buff("Additional information about a buff."))
        .with_variant(
            "BuffConversion",
            RecordNode::new("Additional information about a buff-conversion.")
                .field(Field::new("Source", STRING, "the attribute that is used to calculate the attribute gain"))
                .field(Field::new("Percent", INTEGER, "how much of the source attribute is added to target"))
                .field(Field::new("Target", STRING, "the attribute that gets added to")),
        )
        .with_variant(
            "ComboField",
            RecordNode::new("Additional information about a combo-field.")
                .field(Field::new("FieldType", STRING, "the type of the field").serial_name("field_type")),
        )
        .with_variant(
            "ComboFinisher",
            RecordNode::new("Additional information about a combo-finisher.")
                .field(Field::new("FinisherType", STRING, "the type of finisher").serial_name("finisher_type"))
                .field(Field::new("Percent", INTEGER, "the percent chance that the finisher will trigger")),
        )
        .with_variant(
            "Damage",
            RecordNode::new("Additional information about damage.")
                .field(Field::new("HitCount", INTEGER, "the amount of times the damage hits").serial_name("hit_count"))
                .field(Field::new("DamageMultiplier", DECIMAL, "the damage multiplier").serial_name("dmg_multiplier")),
        )
        .with_variant(
            "Distance",
            RecordNode::new("Additional information about range.")
                .field(Field::new("Distance", INTEGER, "the distance value")),
        )
        .with_variant("NoData", RecordNode::new("No (special) additional information."))
        .with_variant("Number", value("An additional number.", INTEGER, "the number value as referenced by text"))
        .with_variant(
            "Percent",
            RecordNode::new("An additional percentage value.")
                .field(Field::new("Percent", INTEGER, "the percentage value as referenced by text")),
        )
        .with_variant(
            "PrefixedBuff",
            buff("Additional information about a prefixed buff.").field(Field::new(
                "Prefix",
                RecordNode::new("Information about a buff's prefix.")
                    .field(Field::new("Text", STRING, "the prefix text"))
                    .field(Field::new("Icon", STRING, "the prefix icon"))
                    .field(Field::new("Status", STRING, "the prefix status"))
                    .field(Field::new("Description", STRING, "the prefix description")),
                "the buff's prefix",
            )),
        )
        .with_variant(
            "Radius",
            RecordNode::new("Additional information about a radius.")
                .field(Field::new("Distance", INTEGER, "the radius value")),
        )
        .with_variant("Range", value("Additional information about range.", INTEGER, "the range of the trait/skill"))
        .with_variant("Recharge", value("Additional information about recharge.", INTEGER, "the recharge time in seconds"))
        .with_variant(
            "Time",
            RecordNode::new("Additional information about time.")
                .field(Field::new("Duration", INTEGER, "the time value in seconds")),
        )
        .with_variant("Unblockable", value("A fact, indicating that a trait/skill is unblockable.", BOOLEAN, "always true"))
}

fn traits() -> Endpoint {
    let facts = |description: &str| {
        Field::new(
            "Facts",
            SchemaNode::array(trait_facts("Information about a trait's fact (i.e. effect/property).", false)),
            description,
        )
        .optional()
    };
    let traited_facts = |description: &str| {
        Field::new(
            "TraitedFacts",
            SchemaNode::array(trait_facts("Information about a fact that is only active if a specific trait is active.", true)),
            description,
        )
        .serial_name("traited_facts")
        .optional()
    };

    Endpoint::new("/Traits")
        .summary("Returns information about the traits available in the game.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about a trait.")
                .field(id(INTEGER, "the trait's ID"))
                .field(Field::new("Tier", INTEGER, "the trait's tier"))
                .field(Field::new("Order", INTEGER, "the trait's order"))
                .field(Field::new("Name", STRING, "the trait's name"))
                .field(Field::new("Description", STRING, "the trait's description"))
                .field(Field::new("Slot", STRING, "the slot for the trait"))
                .field(facts("a list of facts"))
                .field(traited_facts("a list of traited facts"))
                .field(
                    Field::new(
                        "Skills",
                        SchemaNode::array(
                            RecordNode::new("Information about a skill related to a trait.")
                                .field(id(INTEGER, "the skill's ID"))
                                .field(Field::new("Name", STRING, "the skill's name"))
                                .field(Field::new("Description", STRING, "the skill's description"))
                                .field(Field::new("Icon", STRING, "the URL of the skill's icon"))
                                .field(facts("a list of facts of the skill"))
                                .field(traited_facts("a list of traited facts of the skill")),
                        ),
                        "a list of skills related to this trait",
                    )
                    .optional(),
                )
                .field(Field::new("Specialization", INTEGER, "the specialization that this trait is part of"))
                .field(Field::new("Icon", STRING, "the URL for the trait's icon")),
        )
}

fn token_info(versions: &Versions) -> Endpoint {
    let common = || {
        RecordNode::new("Information about an API key.")
            .field(id(STRING, "the API key that was requested"))
            .field(Field::new("Name", STRING, "the name given to the API key by the account owner"))
            .field(Field::new(
                "Permissions",
                SchemaNode::array(STRING),
                "an array of strings describing which permissions the API key has",
            ))
    };

    Endpoint::new("/TokenInfo")
        .summary("Returns information about the supplied API key.")
        .security([TokenScope::Account])
        .schema(common())
        .schema_at(
            versions.v2019_05_22,
            common()
                .field(Field::new("Type", STRING, "the type of the access token given"))
                .field(
                    Field::new("ExpiresAt", STRING, "if a subtoken is given, ISO8601 timestamp indicating when it expires")
                        .serial_name("expires_at")
                        .optional(),
                )
                .field(
                    Field::new("IssuedAt", STRING, "if a subtoken is given, ISO8601 timestamp indicating when it was created")
                        .serial_name("issued_at")
                        .optional(),
                )
                .field(
                    Field::new(
                        "URLs",
                        SchemaNode::array(STRING),
                        "an array of strings describing what endpoints are available to this token",
                    )
                    .camel_case("urls")
                    .optional(),
                ),
        )
}

fn worlds() -> Endpoint {
    Endpoint::new("/Worlds")
        .summary("Returns information about the available worlds (or servers).")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an available world (or server).")
                .field(id(INTEGER, "the ID of the world"))
                .field(Field::new("Name", STRING, "the name of the world"))
                .field(Field::new("Population", STRING, "the population level of the world")),
        )
}

fn wvw_objectives() -> Endpoint {
    Endpoint::new("/WvW/Objectives")
        .summary("Returns information about the objectives in the World versus World game mode.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an objective in the World versus World game mode.")
                .field(id(STRING, "the ID of the objective"))
                .field(Field::new("Name", STRING, "the name of the objective"))
                .field(Field::new("Type", STRING, "the type of the objective"))
                .field(Field::new("SectorId", INTEGER, "the map sector the objective can be found in").serial_name("sector_id"))
                .field(Field::new("MapId", INTEGER, "the ID of the map the objective can be found on").serial_name("map_id"))
                .field(Field::new("MapType", STRING, "the type of the map the objective can be found on").serial_name("map_type"))
                .field(Field::new(
                    "Coord",
                    SchemaNode::array(DECIMAL),
                    "an array of three numbers representing the X, Y and Z coordinates of the objectives marker on the map",
                ))
                .field(
                    Field::new(
                        "LabelCoord",
                        SchemaNode::array(DECIMAL),
                        "an array of two numbers representing the X and Y coordinates of the sector centroid",
                    )
                    .serial_name("label_coord"),
                )
                .field(Field::new("Marker", STRING, "the icon link"))
                .field(Field::new("ChatLink", STRING, "the chat code for the objective").serial_name("chat_link"))
                .field(
                    Field::new("UpgradeId", INTEGER, "the ID of the upgrades available for the objective")
                        .serial_name("upgrade_id")
                        .optional(),
                ),
        )
}

fn wvw_ranks() -> Endpoint {
    Endpoint::new("/WvW/Ranks")
        .summary("Returns information about the achievable ranks in the World versus World game mode.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an achievable rank in the World versus World game mode.")
                .field(id(INTEGER, "the ID of the rank"))
                .field(Field::new("Title", STRING, "the title of the rank"))
                .field(Field::new("MinLevel", INTEGER, "the WvW level required to unlock this rank").serial_name("min_level")),
        )
}

fn wvw_upgrades() -> Endpoint {
    Endpoint::new("/WvW/Upgrades")
        .summary("Returns information about available upgrades for objectives in the World versus World game mode.")
        .cache(CachePolicy::hours(1))
        .localized()
        .queries(BULK)
        .schema(
            RecordNode::new("Information about an upgrade for objectives in the World versus World game mode.")
                .field(id(INTEGER, "the ID of the upgrade"))
                .field(Field::new(
                    "Tiers",
                    RecordNode::new("Information about an upgrade tier.")
                        .field(Field::new("Name", STRING, "the name of the upgrade tier"))
                        .field(
                            Field::new("YaksRequired", INTEGER, "the amount of dolyaks required to reach this upgrade tier")
                                .serial_name("yaks_required"),
                        )
                        .field(Field::new(
                            "Upgrades",
                            RecordNode::new("Information about an upgrade.")
                                .field(Field::new("Name", STRING, "the name of the upgrade"))
                                .field(Field::new("Description", STRING, "the description for the upgrade"))
                                .field(Field::new("Icon", STRING, "the icon link")),
                            "the upgrades available at the tier",
                        )),
                    "the different tiers of the upgrade",
                )),
        )
}
