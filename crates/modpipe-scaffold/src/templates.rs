//! Builtin scaffold templates.
//!
//! Static template constants for the generated block sources and
//! resource JSON files. `${x}` substitutes an input, `$U{x}` its
//! upper-cased form, `$L{x}` its lower-cased form; lines between
//! `?{cond` and `?}cond` markers are emitted only when the condition
//! holds. The renderer trims the result, so leading and trailing blank
//! lines here are cosmetic.

/// Block class source stub.
pub const BLOCK: &str = r#"
package ${package};

import net.minecraft.block.Block
import net.minecraft.block.BlockState
import net.minecraft.block.material.Material
import net.minecraft.entity.player.PlayerEntity
import net.minecraft.entity.player.PlayerInventory
import net.minecraft.entity.player.ServerPlayerEntity
import net.minecraft.inventory.container.Container
import net.minecraft.inventory.container.INamedContainerProvider
import net.minecraft.tileentity.TileEntity
import net.minecraft.util.Hand
import net.minecraft.util.math.BlockPos
import net.minecraft.util.math.BlockRayTraceResult
import net.minecraft.util.text.ITextComponent
import net.minecraft.util.text.TranslationTextComponent
import net.minecraft.world.IBlockReader
import net.minecraft.world.World
import net.minecraftforge.fml.network.NetworkHooks

class ${name}Block : Block(Properties.create(Material.IRON)) {

    ?{tile
    override fun hasTileEntity(BlockState state): Boolean {
        return true
    }

    override fun createTileEntity(BlockState state, IBlockReader world): TileEntity? {
        return ${name}Tile()
    }
    ?}tile

    ?{gui
    override fun onBlockActivated(BlockState state, World world, BlockPos pos, PlayerEntity player, Hand hand, BlockRayTraceResult result): Boolean {
        if (!world.isRemote) {
            NetworkHooks.openGui((ServerPlayerEntity) player, INamedContainerProvider() {
                override fun getDisplayName(): ITextComponent {
                    return TranslationTextComponent("title.from.langfile") // Put your own title description here
                }

                override fun createMenu(int i, PlayerInventory playerInventory, PlayerEntity playerEntity): Container? {
                    return ${name}Container(i, world, pos, playerInventory, playerEntity)
                }
            }, pos)
            return true
        }
        return super.onBlockActivated(state, world, pos, player, hand, result)
    }
    ?}gui
}

/*
====== Code to move to OreBlocks.kt ======

val $U{name} = ${name}Block()

*/
"#;

/// Tile entity source stub.
pub const TILE: &str = r#"
package ${package}

import net.minecraft.nbt.CompoundNBT
import net.minecraft.tileentity.TileEntity
import net.minecraft.util.Direction
import net.minecraftforge.common.capabilities.Capability
import net.minecraftforge.common.util.INBTSerializable
import net.minecraftforge.common.util.LazyOptional
import net.minecraftforge.items.CapabilityItemHandler
import net.minecraftforge.items.IItemHandler
import net.minecraftforge.items.ItemStackHandler

class ${name}Tile : TileEntity($U{name}_TILE) {

    ?{gui
    val handler: LazyOptional<IItemHandler> = LazyOptional.of(this::createHandler)

    override fun read(tag: CompoundNBT) {
        val invTag = tag.getCompound("inv")
        handler.ifPresent(h -> ((INBTSerializable<CompoundNBT>) h).deserializeNBT(invTag))
    }

    override fun write(tag: CompoundNBT): CompoundNBT {
        handler.ifPresent(h -> {
            CompoundNBT compound = ((INBTSerializable<CompoundNBT>) h).serializeNBT()
            tag.put("inv", compound)
        })
        return super.write(tag)
    }

    private fun createHandler(): IItemHandler {
        return ItemStackHandler(${name}Container.COUNT) {
            override fun onContentsChanged(slot: Int) {
                markDirty()
            }
        }
    }

    override fun getCapability<T>(cap: Capability<T>, side: Direction?): LazyOptional<T> {
        if (cap == CapabilityItemHandler.ITEM_HANDLER_CAPABILITY) {
            return handler.cast()
        }
        return super.getCapability(cap, side)
    }
    ?}gui
}

/*
====== Code to move to your objectholder class ======

@ObjectHolder(${modid_ref}+":$L{name}")
public static TileEntityType<${name}Tile> $U{name}_TILE;

====== Code to move to your registration event class ======

@SubscribeEvent
public static void onTileRegister(final RegistryEvent.Register<TileEntityType<?>> e) {
    e.getRegistry().register(TileEntityType.Builder.create(${name}Tile::new, $U{name}BLOCK).build(null).setRegistryName("$L{name}"));
}

*/
"#;

/// Container class source stub.
pub const CONTAINER: &str = r#"
package ${package}

import net.minecraft.entity.player.PlayerEntity;
import net.minecraft.entity.player.PlayerInventory;
import net.minecraft.inventory.container.Container;
import net.minecraft.inventory.container.Slot;
import net.minecraft.item.ItemStack;
import net.minecraft.item.Items;
import net.minecraft.tileentity.TileEntity;
import net.minecraft.util.IWorldPosCallable;
import net.minecraft.util.math.BlockPos;
import net.minecraft.world.World;
import net.minecraftforge.items.CapabilityItemHandler;
import net.minecraftforge.items.SlotItemHandler;

public class ${name}Container extends Container {

    public static final int COUNT = 1;      // Change for a different number of slots in this container

    private TileEntity tileEntity;
    private PlayerEntity playerEntity;

    public ${name}Container(int windowId, World world, BlockPos pos, PlayerInventory playerInventory, PlayerEntity player) {
        super($U{name}_CONTAINER, windowId);
        tileEntity = world.getTileEntity(pos);
        this.playerEntity = player;

        tileEntity.getCapability(CapabilityItemHandler.ITEM_HANDLER_CAPABILITY).ifPresent(h -> {
            // Add more slots here if needed
            addSlot(new SlotItemHandler(h, 0, 64, 24));
        });
        layoutPlayerInventorySlots(playerInventory, 10, 70);
    }

    @Override
    public boolean canInteractWith(PlayerEntity playerIn) {
        return isWithinUsableDistance(IWorldPosCallable.of(tileEntity.getWorld(), tileEntity.getPos()), playerEntity, $U{name});
    }

    private void layoutPlayerInventorySlots(PlayerInventory playerInventory, int leftCol, int topRow) {
        // Player inventory
        int index = 9;
        int y = topRow;
        for (int j = 0; j < 3; j++) {
            int x = leftCol;
            for (int i = 0; i < 9; i++) {
                addSlot(new Slot(playerInventory, index++, x, y));
                x += 18;
            }
            y += 18;
        }

        // Hotbar
        topRow += 58;
        index = 0;
        int x = leftCol;
        for (int i = 0; i < 9; i++) {
            addSlot(new Slot(playerInventory, index++, x, topRow));
            x += 18;
        }
    }

    @Override
    public ItemStack transferStackInSlot(PlayerEntity playerIn, int index) {
        // @todo provide a proper implementation here depending on what you need!
        return ItemStack.EMPTY;
    }
}

/*
====== Code to move to your objectholder class ======

@ObjectHolder(${modid_ref}+":$L{name}")
public static ContainerType<${name}Container> $U{name}_CONTAINER;

====== Code to move to your registration event class ======

@SubscribeEvent
public static void onContainerRegister(final RegistryEvent.Register<ContainerType<?>> e) {
    e.getRegistry().register(IForgeContainerType.create((windowId, inv, data) -> {
        BlockPos pos = data.readBlockPos();
        World clientWorld = DistExecutor.runForDist(() -> () -> Minecraft.getInstance().world, () -> () -> null);
        PlayerEntity clientPlayer = DistExecutor.runForDist(() -> () -> Minecraft.getInstance().player, () -> () -> null);
        return new ${name}Container(windowId, clientWorld, pos, inv, clientPlayer);
    }).setRegistryName("$L{name}"));
}

*/
"#;

/// Screen class source stub.
pub const SCREEN: &str = r#"
package ${package};

import com.mojang.blaze3d.platform.GlStateManager;
import net.minecraft.client.Minecraft;
import net.minecraft.client.gui.screen.inventory.ContainerScreen;
import net.minecraft.entity.player.PlayerInventory;
import net.minecraft.util.ResourceLocation;
import net.minecraft.util.text.ITextComponent;

public class ${name}Screen extends ContainerScreen<${name}Container> {

    private ResourceLocation GUI = new ResourceLocation(${modid_ref}, "textures/gui/gui.png");  // Put your own gui image here

    public ${name}Screen(${name}Container container, PlayerInventory inv, ITextComponent name) {
        super(container, inv, name);
    }

    @Override
    public void render(int mouseX, int mouseY, float partialTicks) {
        this.renderBackground();
        super.render(mouseX, mouseY, partialTicks);
        this.renderHoveredToolTip(mouseX, mouseY);
    }

    @Override
    protected void drawGuiContainerForegroundLayer(int mouseX, int mouseY) {
        // Draw whatever extra information you want here
    }

    @Override
    protected void drawGuiContainerBackgroundLayer(float partialTicks, int mouseX, int mouseY) {
        GlStateManager.color4f(1.0F, 1.0F, 1.0F, 1.0F);
        this.minecraft.getTextureManager().bindTexture(GUI);
        int relX = (this.width - this.xSize) / 2;
        int relY = (this.height - this.ySize) / 2;
        this.blit(relX, relY, 0, 0, this.xSize, this.ySize);
    }
}

/*
====== Code to move to your client initialization ======

        ScreenManager.registerFactory($U{name}_CONTAINER, ${name}Screen::new);

*/
"#;

/// Blockstate resource stub.
pub const BLOCKSTATE_JSON: &str = r#"
{
    "variants": {
        "": { "model": "${modid}:block/$L{name}" }
    }
}
"#;

/// Block model resource stub.
pub const BLOCKMODEL_JSON: &str = r#"
{
    "parent": "block/cube_all",
    "textures": {
        "all": "${modid}:block/$L{name}"
    }
}
"#;

/// Item model resource stub.
pub const ITEMMODEL_JSON: &str = r#"
{
  "parent": "${modid}:block/$L{name}"
}
"#;

/// Loot table resource stub.
pub const LOOTTABLE_JSON: &str = r#"
{
  "type": "minecraft:block",
  "pools": [
    {
      "rolls": 1,
      "entries": [
        {
          "type": "minecraft:item",
          "name": "${modid}:$L{name}"
        }
      ],
      "conditions": [
        {
          "condition": "minecraft:survives_explosion"
        }
      ]
    }
  ]
}
"#;

/// Crafting recipe resource stub.
pub const RECIPE_JSON: &str = r#"
{
  "type": "minecraft:crafting_shaped",
  "pattern": [
    "ccc",
    "ccc",
    "ccc"
  ],
  "key": {
    "c": {
      "item": "minecraft:clay"
    }
  },
  "result": {
    "item": "${modid}:$L{name}"
  }
}
"#;
