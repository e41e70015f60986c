//! The renderer's shipped content tables.
//!
//! These are the block and biome identifiers the rendering code currently
//! implements, compiled into the binary. The tables lag behind upstream by
//! design - measuring that lag is what the audit is for.

use std::collections::HashSet;

use super::ContentRegistry;

/// Qualified identifiers of every block the renderer can draw.
const SUPPORTED_BLOCKS: &[&str] = &[
    "minecraft:air",
    "minecraft:stone",
    "minecraft:granite",
    "minecraft:polished_granite",
    "minecraft:diorite",
    "minecraft:polished_diorite",
    "minecraft:andesite",
    "minecraft:polished_andesite",
    "minecraft:deepslate",
    "minecraft:cobbled_deepslate",
    "minecraft:polished_deepslate",
    "minecraft:calcite",
    "minecraft:tuff",
    "minecraft:grass_block",
    "minecraft:dirt",
    "minecraft:coarse_dirt",
    "minecraft:podzol",
    "minecraft:rooted_dirt",
    "minecraft:cobblestone",
    "minecraft:mossy_cobblestone",
    "minecraft:oak_planks",
    "minecraft:spruce_planks",
    "minecraft:birch_planks",
    "minecraft:jungle_planks",
    "minecraft:acacia_planks",
    "minecraft:dark_oak_planks",
    "minecraft:crimson_planks",
    "minecraft:warped_planks",
    "minecraft:oak_sapling",
    "minecraft:spruce_sapling",
    "minecraft:birch_sapling",
    "minecraft:jungle_sapling",
    "minecraft:acacia_sapling",
    "minecraft:dark_oak_sapling",
    "minecraft:bedrock",
    "minecraft:water",
    "minecraft:lava",
    "minecraft:sand",
    "minecraft:red_sand",
    "minecraft:gravel",
    "minecraft:gold_ore",
    "minecraft:deepslate_gold_ore",
    "minecraft:iron_ore",
    "minecraft:deepslate_iron_ore",
    "minecraft:coal_ore",
    "minecraft:deepslate_coal_ore",
    "minecraft:copper_ore",
    "minecraft:deepslate_copper_ore",
    "minecraft:nether_gold_ore",
    "minecraft:oak_log",
    "minecraft:spruce_log",
    "minecraft:birch_log",
    "minecraft:jungle_log",
    "minecraft:acacia_log",
    "minecraft:dark_oak_log",
    "minecraft:crimson_stem",
    "minecraft:warped_stem",
    "minecraft:stripped_oak_log",
    "minecraft:stripped_spruce_log",
    "minecraft:stripped_birch_log",
    "minecraft:stripped_jungle_log",
    "minecraft:stripped_acacia_log",
    "minecraft:stripped_dark_oak_log",
    "minecraft:oak_wood",
    "minecraft:spruce_wood",
    "minecraft:birch_wood",
    "minecraft:jungle_wood",
    "minecraft:acacia_wood",
    "minecraft:dark_oak_wood",
    "minecraft:oak_leaves",
    "minecraft:spruce_leaves",
    "minecraft:birch_leaves",
    "minecraft:jungle_leaves",
    "minecraft:acacia_leaves",
    "minecraft:dark_oak_leaves",
    "minecraft:azalea_leaves",
    "minecraft:flowering_azalea_leaves",
    "minecraft:sponge",
    "minecraft:wet_sponge",
    "minecraft:glass",
    "minecraft:lapis_ore",
    "minecraft:deepslate_lapis_ore",
    "minecraft:lapis_block",
    "minecraft:dispenser",
    "minecraft:sandstone",
    "minecraft:chiseled_sandstone",
    "minecraft:cut_sandstone",
    "minecraft:note_block",
    "minecraft:white_bed",
    "minecraft:powered_rail",
    "minecraft:detector_rail",
    "minecraft:sticky_piston",
    "minecraft:cobweb",
    "minecraft:grass",
    "minecraft:fern",
    "minecraft:dead_bush",
    "minecraft:seagrass",
    "minecraft:tall_seagrass",
    "minecraft:piston",
    "minecraft:piston_head",
    "minecraft:white_wool",
    "minecraft:orange_wool",
    "minecraft:magenta_wool",
    "minecraft:light_blue_wool",
    "minecraft:yellow_wool",
    "minecraft:lime_wool",
    "minecraft:pink_wool",
    "minecraft:gray_wool",
    "minecraft:light_gray_wool",
    "minecraft:cyan_wool",
    "minecraft:purple_wool",
    "minecraft:blue_wool",
    "minecraft:brown_wool",
    "minecraft:green_wool",
    "minecraft:red_wool",
    "minecraft:black_wool",
    "minecraft:dandelion",
    "minecraft:poppy",
    "minecraft:blue_orchid",
    "minecraft:allium",
    "minecraft:azure_bluet",
    "minecraft:red_tulip",
    "minecraft:orange_tulip",
    "minecraft:white_tulip",
    "minecraft:pink_tulip",
    "minecraft:oxeye_daisy",
    "minecraft:cornflower",
    "minecraft:lily_of_the_valley",
    "minecraft:brown_mushroom",
    "minecraft:red_mushroom",
    "minecraft:gold_block",
    "minecraft:iron_block",
    "minecraft:bricks",
    "minecraft:tnt",
    "minecraft:bookshelf",
    "minecraft:obsidian",
    "minecraft:torch",
    "minecraft:wall_torch",
    "minecraft:fire",
    "minecraft:soul_fire",
    "minecraft:spawner",
    "minecraft:oak_stairs",
    "minecraft:chest",
    "minecraft:redstone_wire",
    "minecraft:diamond_ore",
    "minecraft:deepslate_diamond_ore",
    "minecraft:diamond_block",
    "minecraft:crafting_table",
    "minecraft:wheat",
    "minecraft:farmland",
    "minecraft:furnace",
    "minecraft:ladder",
    "minecraft:rail",
    "minecraft:cobblestone_stairs",
    "minecraft:lever",
    "minecraft:stone_pressure_plate",
    "minecraft:oak_pressure_plate",
    "minecraft:redstone_ore",
    "minecraft:deepslate_redstone_ore",
    "minecraft:redstone_torch",
    "minecraft:snow",
    "minecraft:ice",
    "minecraft:snow_block",
    "minecraft:cactus",
    "minecraft:clay",
    "minecraft:sugar_cane",
    "minecraft:jukebox",
    "minecraft:oak_fence",
    "minecraft:pumpkin",
    "minecraft:netherrack",
    "minecraft:soul_sand",
    "minecraft:soul_soil",
    "minecraft:basalt",
    "minecraft:polished_basalt",
    "minecraft:glowstone",
    "minecraft:nether_portal",
    "minecraft:carved_pumpkin",
    "minecraft:jack_o_lantern",
    "minecraft:cake",
    "minecraft:repeater",
    "minecraft:amethyst_block",
    "minecraft:budding_amethyst",
    "minecraft:amethyst_cluster",
    "minecraft:azalea",
    "minecraft:flowering_azalea",
    "minecraft:moss_carpet",
    "minecraft:moss_block",
    "minecraft:dripstone_block",
    "minecraft:pointed_dripstone",
    "minecraft:glow_lichen",
    "minecraft:smooth_basalt",
    "minecraft:raw_iron_block",
    "minecraft:raw_copper_block",
    "minecraft:raw_gold_block",
];

/// Bare identifiers of every biome the renderer can color.
const SUPPORTED_BIOMES: &[&str] = &[
    "the_void",
    "plains",
    "sunflower_plains",
    "snowy_plains",
    "ice_spikes",
    "desert",
    "swamp",
    "forest",
    "flower_forest",
    "birch_forest",
    "dark_forest",
    "old_growth_birch_forest",
    "old_growth_pine_taiga",
    "old_growth_spruce_taiga",
    "taiga",
    "snowy_taiga",
    "savanna",
    "savanna_plateau",
    "windswept_hills",
    "windswept_gravelly_hills",
    "windswept_forest",
    "windswept_savanna",
    "jungle",
    "sparse_jungle",
    "bamboo_jungle",
    "badlands",
    "eroded_badlands",
    "wooded_badlands",
    "meadow",
    "grove",
    "snowy_slopes",
    "frozen_peaks",
    "jagged_peaks",
    "stony_peaks",
    "river",
    "frozen_river",
    "beach",
    "snowy_beach",
    "stony_shore",
    "warm_ocean",
    "lukewarm_ocean",
    "deep_lukewarm_ocean",
    "ocean",
    "deep_ocean",
    "cold_ocean",
    "deep_cold_ocean",
    "frozen_ocean",
    "deep_frozen_ocean",
    "mushroom_fields",
    "dripstone_caves",
    "lush_caves",
    "nether_wastes",
    "warped_forest",
    "crimson_forest",
    "soul_sand_valley",
    "basalt_deltas",
    "the_end",
    "end_highlands",
    "end_midlands",
    "small_end_islands",
    "end_barrens",
];

/// Registry backed by the renderer's compiled-in content tables.
pub struct BuiltinRegistry {
    blocks: HashSet<String>,
    biomes: HashSet<String>,
}

impl BuiltinRegistry {
    /// Builds the registry from the shipped tables.
    pub fn new() -> Self {
        Self {
            blocks: SUPPORTED_BLOCKS.iter().map(|s| s.to_string()).collect(),
            biomes: SUPPORTED_BIOMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRegistry for BuiltinRegistry {
    fn known_block_ids(&self) -> &HashSet<String> {
        &self.blocks
    }

    fn known_biome_ids(&self) -> &HashSet<String> {
        &self.biomes
    }
}
