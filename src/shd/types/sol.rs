use alloy::sol;

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256 balance);
        function allowance(address owner, address spender) external view returns (uint256);
        function transfer(address to, uint256 value) external returns (bool);
        function transferFrom(address from, address to, uint256 value) external returns (bool);
        function approve(address spender, uint256 value) external returns (bool);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ICore {
        event SetTokenCreated(
            address indexed _setTokenAddress,
            address _factory,
            address[] _components,
            uint256[] _units,
            uint256 _naturalUnit,
            bytes32 _name,
            bytes32 _symbol
        );

        function create(
            address _factory,
            address[] _components,
            uint256[] _units,
            uint256 _naturalUnit,
            bytes32 _name,
            bytes32 _symbol,
            bytes _callData
        ) external returns (address);
        function issue(address _set, uint256 _quantity) external;
        function issueTo(address _recipient, address _set, uint256 _quantity) external;
        function redeem(address _set, uint256 _quantity) external;
        function redeemAndWithdrawTo(address _set, address _to, uint256 _quantity, uint256 _toExclude) external;
        function deposit(address _token, uint256 _quantity) external;
        function withdraw(address _token, uint256 _quantity) external;
        function batchDeposit(address[] _tokens, uint256[] _quantities) external;
        function batchWithdraw(address[] _tokens, uint256[] _quantities) external;

        function validSets(address _set) external view returns (bool);
        function validFactories(address _factory) external view returns (bool);
        function setTokens() external view returns (address[] memory);
        function transferProxy() external view returns (address);
        function vault() external view returns (address);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ISetToken {
        function getComponents() external view returns (address[] memory);
        function getUnits() external view returns (uint256[] memory);
        function naturalUnit() external view returns (uint256);
        function factory() external view returns (address);
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IRebalancingSetToken {
        function propose(
            address _nextSet,
            address _auctionLibrary,
            uint256 _auctionTimeToPivot,
            uint256 _auctionStartPrice,
            uint256 _auctionPivotPrice
        ) external;
        function startRebalance() external;
        function settleRebalance() external;
        function endFailedAuction() external;

        function manager() external view returns (address);
        function currentSet() external view returns (address);
        function nextSet() external view returns (address);
        function unitShares() external view returns (uint256);
        function naturalUnit() external view returns (uint256);
        function rebalanceState() external view returns (uint8);
        function proposalStartTime() external view returns (uint256);
        function lastRebalanceTimestamp() external view returns (uint256);
        function rebalanceInterval() external view returns (uint256);
        function proposalPeriod() external view returns (uint256);
        function auctionLibrary() external view returns (address);
        function auctionParameters() external view returns (
            uint256 auctionStartTime,
            uint256 auctionTimeToPivot,
            uint256 auctionStartPrice,
            uint256 auctionPivotPrice
        );
        function minimumBid() external view returns (uint256);
        function remainingCurrentSets() external view returns (uint256);
        function startingCurrentSetAmount() external view returns (uint256);
        function getCombinedTokenArray() external view returns (address[] memory);
        function getBidPrice(uint256 _quantity) external view returns (uint256[] memory inflow, uint256[] memory outflow);
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IRebalancingSetIssuanceModule {
        function issueRebalancingSet(address _rebalancingSetAddress, uint256 _rebalancingSetQuantity, bool _keepChangeInVault) external;
        function issueRebalancingSetWrappingEther(address _rebalancingSetAddress, uint256 _rebalancingSetQuantity, bool _keepChangeInVault) external payable;
        function redeemRebalancingSet(address _rebalancingSetAddress, uint256 _rebalancingSetQuantity, bool _keepChangeInVault) external;
        function redeemRebalancingSetUnwrappingEther(address _rebalancingSetAddress, uint256 _rebalancingSetQuantity, bool _keepChangeInVault) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IRebalanceAuctionModule {
        function bid(address _rebalancingSetToken, uint256 _quantity, bool _allowPartialFill) external;
        function bidAndWithdraw(address _rebalancingSetToken, uint256 _quantity, bool _allowPartialFill) external;
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IProtocolViewer {
        struct TradingPoolInfo {
            address trader;
            address allocator;
            uint256 currentAllocation;
            uint256 newEntryFee;
            uint256 feeUpdateTimestamp;
        }

        struct RebalancingSetInfo {
            address manager;
            address feeRecipient;
            address currentSet;
            address liquidator;
            uint256 unitShares;
            uint256 naturalUnit;
            uint256 rebalanceInterval;
            uint256 entryFee;
            uint256 rebalanceFee;
            uint256 lastRebalanceTimestamp;
            uint8 rebalanceState;
            string name;
            string symbol;
        }

        struct CollateralSetInfo {
            address[] components;
            uint256[] units;
            uint256 naturalUnit;
            string name;
            string symbol;
        }

        function batchFetchBalancesOf(address[] _tokenAddresses, address _owner) external view returns (uint256[] memory);
        function batchFetchUsersBalances(address[] _tokenAddresses, address[] _userAddresses) external view returns (uint256[] memory);
        function batchFetchSupplies(address[] _tokenAddresses) external view returns (uint256[] memory);
        function fetchRebalanceProposalStateAsync(address _rebalancingSetToken) external view returns (
            uint8 rebalanceState,
            address[] memory proposalAddresses,
            uint256[] memory auctionParameters
        );
        function fetchRebalanceAuctionStateAsync(address _rebalancingSetToken) external view returns (uint256[] memory);
        function batchFetchRebalanceStateAsync(address[] _rebalancingSetTokens) external view returns (uint8[] memory);
        function batchFetchUnitSharesAsync(address[] _rebalancingSetTokens) external view returns (uint256[] memory);
        function fetchNewTradingPoolDetails(address _tradingPool) external view returns (
            TradingPoolInfo memory poolInfo,
            RebalancingSetInfo memory rbSetInfo,
            CollateralSetInfo memory collateralInfo
        );
        function batchFetchTradingPoolOperator(address[] _tradingPools) external view returns (address[] memory);
        function batchFetchTradingPoolAllocations(address[] _tradingPools) external view returns (uint256[] memory);
        function batchFetchOraclePrices(address[] _oracles) external view returns (uint256[] memory);
        function batchFetchMACOCrossoverTimestamp(address[] _managers) external view returns (uint256[] memory);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IMACOStrategyManager {
        function initialPropose(address _rebalancingSetTokenAddress) external;
        function confirmPropose(address _rebalancingSetTokenAddress) external;

        function rebalancingSetTokenAddress() external view returns (address);
        function movingAveragePriceFeed() external view returns (address);
        function riskAssetAddress() external view returns (address);
        function stableAssetAddress() external view returns (address);
        function riskCollateralAddress() external view returns (address);
        function stableCollateralAddress() external view returns (address);
        function movingAverageDays() external view returns (uint256);
        function auctionLibrary() external view returns (address);
        function auctionTimeToPivot() external view returns (uint256);
        function crossoverConfirmationMinTime() external view returns (uint256);
        function crossoverConfirmationMaxTime() external view returns (uint256);
        function lastCrossoverConfirmationTimestamp() external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ISocialTradingManager {
        event TradingPoolCreated(
            address indexed trader,
            address indexed allocator,
            address indexed tradingPool,
            uint256 startingAllocation
        );

        function createTradingPool(
            address _tradingPairAllocator,
            uint256 _startingBaseAssetAllocation,
            uint256 _startingUSDValue,
            bytes32 _name,
            bytes32 _symbol,
            bytes _rebalancingSetCallData
        ) external;
        function updateAllocation(address _tradingPool, uint256 _newAllocation, bytes _liquidatorData) external;
        function initiateEntryFeeChange(address _tradingPool, uint256 _newEntryFee) external;
        function finalizeEntryFeeChange(address _tradingPool) external;
        function setTrader(address _tradingPool, address _newTrader) external;
        function setLiquidator(address _tradingPool, address _newLiquidator) external;
        function setFeeRecipient(address _tradingPool, address _newFeeRecipient) external;

        function pools(address _tradingPool) external view returns (
            address trader,
            address allocator,
            uint256 currentAllocation,
            uint256 newEntryFee,
            uint256 feeUpdateTimestamp
        );
        function maxEntryFee() external view returns (uint256);
        function feeUpdateTimelock() external view returns (uint256);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IMedianizer {
        function read() external view returns (bytes32);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IMovingAverageOracle {
        function read(uint256 _dataDays) external view returns (bytes32);
        function getSourceMedianizer() external view returns (address);
    }
);

sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IChainLinkPF {
        function latestAnswer() external view returns (int256);
        function decimals() external view returns (uint8);
    }
);
